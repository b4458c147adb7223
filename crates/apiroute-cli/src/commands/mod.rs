//! Command implementations.

mod check;
mod resolve;
mod stage;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use stage::execute as stage_execute;

use apiroute_config::{ConfigDiscovery, ConfigError, ResolvedConfig, UserConfig, resolve as resolve_config};
use tracing::{debug, info};

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

/// Load the user config named by the arguments.
///
/// Without `--config`, a missing config file is not an error: the project
/// resolves with defaults. `--root` overrides any root from the file.
pub(crate) fn load_user_config(args: &ConfigArgs) -> Result<UserConfig> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let discovery = ConfigDiscovery::new(&root);

    let mut user = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::ConfigFileNotFound(path.clone()));
            }
            discovery.load_from(path)?
        }
        None => match discovery.load() {
            Ok(user) => user,
            Err(ConfigError::NotFound) => {
                info!("no config file found in {}, using defaults", root.display());
                UserConfig::default()
            }
            Err(err) => return Err(err.into()),
        },
    };

    if args.root.is_some() || user.root.is_none() {
        user.root = Some(root);
    }
    debug!(root = ?user.root, "loaded user config");
    Ok(user)
}

pub(crate) fn load_resolved(args: &ConfigArgs) -> Result<ResolvedConfig> {
    Ok(resolve_config(load_user_config(args)?)?)
}
