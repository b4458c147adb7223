//! Command-line interface definition.
//!
//! - `apiroute resolve` - print the resolved configuration as JSON
//! - `apiroute check` - resolve and validate the configuration
//! - `apiroute stage` - copy the generated API directory into a build target

use std::path::PathBuf;

use apiroute_config::DEFAULT_MODULE_ID;
use clap::{Args, Parser, Subcommand};

/// apiroute - file-system based API routing toolkit
#[derive(Parser, Debug)]
#[command(
    name = "apiroute",
    version,
    about = "Resolve API routing config and stage generated API output"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fully resolved configuration as JSON
    Resolve(ResolveArgs),

    /// Resolve the configuration and validate it against the file system
    Check(CheckArgs),

    /// Copy generated API files into a build target
    Stage(StageArgs),
}

/// Where to find the project and its config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Explicit config file (.toml, .json or package.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip file-system checks
    #[arg(long)]
    pub schema_only: bool,
}

#[derive(Args, Debug)]
pub struct StageArgs {
    /// Path whose parent (or grandparent) holds the generated `.api` directory
    #[arg(value_name = "ORIGIN")]
    pub origin: PathBuf,

    /// Directory to recreate with the staged files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// File to stage, relative to the generated directory (repeatable)
    #[arg(short, long = "file", value_name = "FILE", required_unless_present = "all")]
    pub files: Vec<PathBuf>,

    /// Stage every file in the generated directory
    #[arg(long, conflicts_with = "files")]
    pub all: bool,

    /// Module identifier used in the generated files
    #[arg(long, default_value = DEFAULT_MODULE_ID)]
    pub old_id: String,

    /// Module identifier for the target (defaults to --old-id, i.e. plain copy)
    #[arg(long)]
    pub new_id: Option<String>,

    /// Treat --old-id as a regular expression
    #[arg(long)]
    pub pattern: bool,

    /// Source directory candidate relative to ORIGIN (repeatable, replaces defaults)
    #[arg(long = "candidate", value_name = "PATH")]
    pub candidates: Vec<PathBuf>,

    /// Print the staging report as JSON
    #[arg(long)]
    pub json: bool,
}
