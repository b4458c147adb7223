//! Pluggable config validation strategies
//!
//! The resolver accepts anything well-typed. Consumers that are about to read
//! the configured directories can run one of these validators first.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::resolve::ResolvedConfig;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use apiroute_config::{ConfigValidator, SchemaValidator, UserConfig, resolve_in};
/// use std::path::Path;
///
/// let config = resolve_in(UserConfig::default(), Path::new("/proj"));
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()> {
        if config.module_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "module_id".to_string(),
                hint: "module id cannot be empty".to_string(),
            });
        }

        for mapper in &config.mapper_list {
            if !IDENTIFIER.is_match(&mapper.method) {
                return Err(ConfigError::InvalidHandlerName {
                    key: mapper.name.clone(),
                    name: mapper.method.clone(),
                });
            }
        }

        if config.include.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "include".to_string(),
                hint: "remove empty patterns from 'include'".to_string(),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] and then checks that every route directory
/// exists.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ResolvedConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for route in &config.dirs {
            if !route.dir.is_dir() {
                return Err(ConfigError::DirNotFound {
                    path: route.dir.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ResolvedConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &ResolvedConfig) -> Result<()> {
    FsValidator.validate(config)
}
