//! apiroute CLI - resolve API routing config and stage generated output.

use apiroute_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Stage(stage_args) => commands::stage_execute(stage_args),
    };

    result.map_err(error::cli_error_to_miette)
}
