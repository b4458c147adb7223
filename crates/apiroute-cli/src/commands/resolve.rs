use crate::cli::ResolveArgs;
use crate::error::Result;

use super::load_resolved;

/// Print the resolved configuration to stdout.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = load_resolved(&args.config)?;
    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{json}");
    Ok(())
}
