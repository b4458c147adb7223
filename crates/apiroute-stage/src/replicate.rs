//! Recreate a target directory from the generated API directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, StageError};
use crate::replace::{ReplaceMode, Substitution};
use crate::source::SourceCandidates;

/// What happened to one staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum StageAction {
    /// Identifier rewritten in the file's bytes.
    Rewritten { replacements: usize },
    /// Copied byte for byte.
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    /// Name relative to the source and target directories.
    pub name: PathBuf,
    #[serde(flatten)]
    pub action: StageAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub files: Vec<StagedFile>,
}

/// Options for a staging run.
///
/// ```no_run
/// use apiroute_stage::{ReplaceMode, SourceCandidates, StageOptions};
///
/// let report = StageOptions::new()
///     .candidates(SourceCandidates::new([".api", "../.api"]))
///     .rename("@api", "@api-server")
///     .mode(ReplaceMode::Literal)
///     .replicate("build", "dist/server/.api", ["server.js"])
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StageOptions {
    candidates: SourceCandidates,
    mode: ReplaceMode,
    old_id: String,
    new_id: String,
}

impl StageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(mut self, candidates: SourceCandidates) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn mode(mut self, mode: ReplaceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rewrite `old_id` to `new_id` in every staged file.
    ///
    /// Equal identifiers mean a plain copy.
    pub fn rename(mut self, old_id: impl Into<String>, new_id: impl Into<String>) -> Self {
        self.old_id = old_id.into();
        self.new_id = new_id.into();
        self
    }

    /// Stage `files` from the generated directory near `origin` into `target`.
    ///
    /// Every name is checked before anything is touched; a name escaping the
    /// target leaves an existing `target` as it was. Otherwise any existing
    /// `target` is removed first, and a failure part way through leaves it
    /// partially populated.
    pub fn replicate<I, P>(
        &self,
        origin: impl AsRef<Path>,
        target: impl AsRef<Path>,
        files: I,
    ) -> Result<StageReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let source = self.candidates.locate(origin.as_ref())?;
        let target = target.as_ref().to_path_buf();

        let substitution = if self.old_id != self.new_id {
            Some(Substitution::new(&self.old_id, &self.new_id, self.mode)?)
        } else {
            None
        };

        let names = files
            .into_iter()
            .map(|file| checked_name(file.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        reset_dir(&target)?;

        let mut staged = Vec::new();
        for name in names {
            let from = source.join(&name);
            let to = target.join(&name);

            if !from.is_file() {
                return Err(StageError::MissingFile { path: from });
            }
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent).map_err(StageError::io(parent))?;
            }

            let action = match &substitution {
                Some(substitution) => {
                    let content = fs::read(&from).map_err(StageError::io(&from))?;
                    let (content, replacements) = substitution.apply(&content);
                    fs::write(&to, content).map_err(StageError::io(&to))?;
                    StageAction::Rewritten { replacements }
                }
                None => {
                    fs::copy(&from, &to).map_err(StageError::io(&to))?;
                    StageAction::Copied
                }
            };

            debug!(file = %name.display(), ?action, "staged file");
            staged.push(StagedFile { name, action });
        }

        info!(
            source = %source.display(),
            target = %target.display(),
            files = staged.len(),
            "staged generated api directory"
        );

        Ok(StageReport {
            source,
            target,
            files: staged,
        })
    }
}

/// Stage `files` from the generated directory near `origin` into `target`,
/// rewriting `old_id` to `new_id` when they differ.
///
/// Uses the default source candidates and literal matching.
pub fn replicate<I, P>(
    origin: impl AsRef<Path>,
    target: impl AsRef<Path>,
    files: I,
    old_id: &str,
    new_id: &str,
) -> Result<StageReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    StageOptions::new()
        .rename(old_id, new_id)
        .replicate(origin, target, files)
}

fn reset_dir(target: &Path) -> Result<()> {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.is_dir() => {
            debug!(target = %target.display(), "removing existing staging directory");
            fs::remove_dir_all(target).map_err(StageError::io(target))?;
        }
        Ok(_) => fs::remove_file(target).map_err(StageError::io(target))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(StageError::io(target)(err)),
    }
    fs::create_dir_all(target).map_err(StageError::io(target))
}

/// Reject names that would land outside the target directory.
fn checked_name(name: &Path) -> Result<PathBuf> {
    let cleaned = name.clean();
    let escapes = cleaned.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || cleaned.as_os_str().is_empty() || cleaned == Path::new(".") {
        return Err(StageError::EscapesTarget {
            name: name.to_path_buf(),
        });
    }
    Ok(cleaned)
}
