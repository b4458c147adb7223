//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    // Validation errors (opt-in, never raised by the resolver)
    #[error("route directory not found: {}", path.display())]
    DirNotFound { path: PathBuf },

    #[error("mapper entry '{key}' names an invalid handler: '{name}'")]
    InvalidHandlerName { key: String, name: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
