//! Command-line front end for `apiroute-config` and `apiroute-stage`.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `resolve`, `check` and `stage`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
