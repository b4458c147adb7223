use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StageError>;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("generated api directory not found from {}: tried {}", origin.display(), display_paths(tried))]
    SourceNotFound {
        origin: PathBuf,
        tried: Vec<PathBuf>,
    },

    #[error("source file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("file name escapes the staging directory: {}", name.display())]
    EscapesTarget { name: PathBuf },

    #[error("cannot substitute an empty identifier")]
    EmptyIdentifier,

    #[error("invalid identifier pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StageError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| StageError::Io { path, source }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
