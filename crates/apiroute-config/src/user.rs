//! Partial, caller-supplied configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::hooks::{BuildHook, BuildOptions};
use crate::mapper::MapperTable;

/// One physical directory mapped to one route namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirRoute {
    /// Source directory; root-relative on input, absolute once resolved.
    pub dir: PathBuf,

    /// URL prefix for routes found in `dir`.
    #[serde(default)]
    pub route: String,

    /// Glob patterns excluded for this directory only.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl DirRoute {
    pub fn new(dir: impl Into<PathBuf>, route: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            route: route.into(),
            exclude: Vec::new(),
        }
    }
}

/// Minification setting for a build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Minify {
    Enabled(bool),
    Tool(Minifier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    Terser,
    Esbuild,
}

impl Minify {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Minify::Enabled(false))
    }
}

impl From<bool> for Minify {
    fn from(enabled: bool) -> Self {
        Minify::Enabled(enabled)
    }
}

/// Caller-supplied configuration. Every field is optional.
///
/// Keys are snake_case; multi-word keys also accept their camelCase spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    #[serde(alias = "moduleId", skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,

    #[serde(alias = "cacheDir", skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Server entry, relative to root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<PathBuf>,

    /// Handler entry, relative to root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<PathBuf>,

    /// Configure entry, relative to root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configure: Option<PathBuf>,

    #[serde(alias = "routeBase", skip_serializing_if = "Option::is_none")]
    pub route_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<DirRoute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapper: Option<MapperTable>,

    #[serde(alias = "clientOutDir", skip_serializing_if = "Option::is_none")]
    pub client_out_dir: Option<PathBuf>,

    #[serde(alias = "serverOutDir", skip_serializing_if = "Option::is_none")]
    pub server_out_dir: Option<PathBuf>,

    #[serde(alias = "serverMinify", skip_serializing_if = "Option::is_none")]
    pub server_minify: Option<Minify>,

    #[serde(alias = "clientMinify", skip_serializing_if = "Option::is_none")]
    pub client_minify: Option<Minify>,

    #[serde(alias = "disableBuild", skip_serializing_if = "Option::is_none")]
    pub disable_build: Option<bool>,

    #[serde(skip)]
    pub client_build: Option<BuildHook>,

    #[serde(skip)]
    pub server_build: Option<BuildHook>,
}

impl UserConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use apiroute_config::{MapperValue, UserConfig};
    /// use serde_json::json;
    ///
    /// let config = UserConfig::from_value(json!({
    ///     "module_id": "@server-api",
    ///     "mapper": { "DELETE": false }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.module_id.as_deref(), Some("@server-api"));
    /// assert_eq!(config.mapper.unwrap()["DELETE"], MapperValue::Disabled);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_client_build<F>(mut self, hook: F) -> Self
    where
        F: Fn(BuildOptions) -> BuildOptions + Send + Sync + 'static,
    {
        self.client_build = Some(BuildHook::new(hook));
        self
    }

    pub fn with_server_build<F>(mut self, hook: F) -> Self
    where
        F: Fn(BuildOptions) -> BuildOptions + Send + Sync + 'static,
    {
        self.server_build = Some(BuildHook::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minify_accepts_flag_or_tool() {
        let flag: Minify = serde_json::from_value(json!(true)).unwrap();
        let tool: Minify = serde_json::from_value(json!("esbuild")).unwrap();
        assert_eq!(flag, Minify::Enabled(true));
        assert_eq!(tool, Minify::Tool(Minifier::Esbuild));
        assert!(tool.is_enabled());
        assert!(!Minify::Enabled(false).is_enabled());
    }

    #[test]
    fn dir_route_exclude_is_optional() {
        let route: DirRoute = serde_json::from_value(json!({ "dir": "src/admin", "route": "admin" }))
            .unwrap();
        assert_eq!(route, DirRoute::new("src/admin", "admin"));
    }

    #[test]
    fn from_value_reports_bad_fields() {
        let err = UserConfig::from_value(json!({ "include": "**/*.ts" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let config = UserConfig::from_value(json!({
            "moduleId": "@x",
            "cacheDir": ".gen",
            "routeBase": "rpc",
            "clientOutDir": "web",
            "serverOutDir": "srv",
            "clientMinify": "terser",
            "serverMinify": true,
            "disableBuild": true
        }))
        .unwrap();
        assert_eq!(config.module_id.as_deref(), Some("@x"));
        assert_eq!(config.cache_dir, Some(PathBuf::from(".gen")));
        assert_eq!(config.route_base.as_deref(), Some("rpc"));
        assert_eq!(config.client_out_dir, Some(PathBuf::from("web")));
        assert_eq!(config.server_out_dir, Some(PathBuf::from("srv")));
        assert_eq!(config.client_minify, Some(Minify::Tool(Minifier::Terser)));
        assert_eq!(config.server_minify, Some(Minify::Enabled(true)));
        assert_eq!(config.disable_build, Some(true));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let value = serde_json::to_value(UserConfig::default().with_root("/proj")).unwrap();
        assert_eq!(value, json!({ "root": "/proj" }));
    }
}
