//! Location of the generated API directory.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::{Result, StageError};

/// Default search order, relative to the origin.
///
/// Build layouts differ in how deep the origin sits below the directory that
/// holds `.api`, so the sibling is tried before the grandparent's child.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["../.api", "../../.api"];

/// Ordered list of places the generated directory may live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCandidates(Vec<PathBuf>);

impl SourceCandidates {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(candidates.into_iter().map(Into::into).collect())
    }

    /// Append a candidate, tried after all existing ones.
    pub fn push(&mut self, candidate: impl Into<PathBuf>) {
        self.0.push(candidate.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Absolute candidate paths for `origin`, in search order.
    pub fn expand(&self, origin: &Path) -> Result<Vec<PathBuf>> {
        let origin = absolute(origin)?;
        Ok(self.iter().map(|candidate| origin.join(candidate).clean()).collect())
    }

    /// First candidate that exists on disk.
    pub fn locate(&self, origin: &Path) -> Result<PathBuf> {
        let tried = self.expand(origin)?;
        match tried.iter().find(|path| path.exists()) {
            Some(found) => {
                debug!(source = %found.display(), "located generated api directory");
                Ok(found.clone())
            }
            None => Err(StageError::SourceNotFound {
                origin: origin.to_path_buf(),
                tried,
            }),
        }
    }
}

impl Default for SourceCandidates {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES)
    }
}

pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.clean());
    }
    let cwd = std::env::current_dir().map_err(StageError::io(path))?;
    Ok(cwd.join(path).clean())
}
