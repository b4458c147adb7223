//! File-based config discovery for CLI use
//!
//! Finds the routing config next to a project and layers environment
//! overrides on top of it.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Toml};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::user::UserConfig;

/// Key holding the config inside `package.json`.
pub const PACKAGE_JSON_KEY: &str = "apiroute";

/// Prefix for environment overrides; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "APIROUTE_";

const TOML_FILE: &str = "apiroute.toml";
const JSON_FILE: &str = "apiroute.json";
const PACKAGE_JSON: &str = "package.json";

/// File-based configuration discovery
///
/// Library users with an in-memory config should call
/// [`UserConfig::from_value`] instead.
///
/// # Example
///
/// ```no_run
/// use apiroute_config::{ConfigDiscovery, resolve};
///
/// let user = ConfigDiscovery::new(".").load().unwrap();
/// let config = resolve(user).unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. `apiroute.toml`
    /// 2. `apiroute.json`
    /// 3. `package.json` with a non-null `apiroute` field
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_FILE, JSON_FILE] {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_JSON_KEY) {
            Some(value) if !value.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file
    ///
    /// A config without a `root` is rooted at the discovery directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<UserConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<UserConfig> {
        if !path.is_file() {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let figment = match path.file_name().and_then(|name| name.to_str()) {
            Some(PACKAGE_JSON) => Figment::from(Json::file(path)).focus(PACKAGE_JSON_KEY),
            _ => match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Figment::from(Toml::file(path)),
                Some("json") => Figment::from(Json::file(path)),
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: path.display().to_string(),
                        hint: format!(
                            "unsupported config format {:?}, expected .toml or .json",
                            other.unwrap_or("")
                        ),
                    });
                }
            },
        };

        debug!(path = %path.display(), "loading api routing config");

        let mut config: UserConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: path.display().to_string(),
                hint: e.to_string(),
            })?;

        if config.root.is_none() {
            let base = path.parent().unwrap_or(&self.root);
            config.root = Some(base.to_path_buf());
        }

        Ok(config)
    }
}

/// Discover and load config from current directory (convenience function)
pub fn discover() -> Result<UserConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
