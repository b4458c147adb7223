use apiroute_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

use super::load_resolved;

pub fn execute(args: CheckArgs) -> Result<()> {
    let config = load_resolved(&args.config)?;

    if args.schema_only {
        SchemaValidator.validate(&config)?;
    } else {
        FsValidator.validate(&config)?;
    }

    ui::success(&format!(
        "{} route director{} and {} handler{} under {}",
        config.dirs.len(),
        if config.dirs.len() == 1 { "y" } else { "ies" },
        config.mapper_list.len(),
        if config.mapper_list.len() == 1 { "" } else { "s" },
        config.root.display()
    ));
    Ok(())
}
