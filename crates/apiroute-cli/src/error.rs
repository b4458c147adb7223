//! Error handling for the apiroute CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! result into a miette report.

use std::path::PathBuf;

use apiroute_config::ConfigError;
use apiroute_stage::StageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Staging error: {0}")]
    Stage(#[from] StageError),

    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(ConfigError::NotFound) | CliError::ConfigFileNotFound(_) => {
            miette::miette!(
                help = "Create apiroute.toml, apiroute.json, or an \"apiroute\" field in package.json",
                "{}",
                err
            )
        }
        CliError::Config(ConfigError::DirNotFound { ref path }) => miette::miette!(
            help = format!("Create {} or remove it from `dirs`", path.display()),
            "{}",
            err
        ),
        CliError::Stage(StageError::SourceNotFound { .. }) => miette::miette!(
            help = "Generate the API directory first, or pass --candidate to point at it",
            "{}",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}
