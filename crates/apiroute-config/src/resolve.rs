//! Resolution of a partial [`UserConfig`] into a [`ResolvedConfig`].
//!
//! Resolution is total: it never validates paths and never touches the file
//! system. The only ambient input is the working directory, used as the root
//! when none is given.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::hooks::BuildHook;
use crate::mapper::{Mapper, MapperTable, mapper_list, merge_mapper};
use crate::paths::{join, normalize_root, url_path};
use crate::user::{DirRoute, Minify, UserConfig};

pub const DEFAULT_MODULE_ID: &str = "@api";
pub const DEFAULT_CACHE_DIR: &str = ".api";
pub const DEFAULT_ROUTE_BASE: &str = "api";
pub const DEFAULT_API_DIR: &str = "src/api";
pub const DEFAULT_CLIENT_OUT_DIR: &str = "dist/client";
pub const DEFAULT_SERVER_OUT_DIR: &str = "dist";
pub const DEFAULT_INCLUDE: [&str; 2] = ["**/*.ts", "**/*.js"];

pub const SERVER_FILE: &str = "server.js";
pub const HANDLER_FILE: &str = "handler.js";
pub const CONFIGURE_FILE: &str = "configure.js";
pub const ROUTERS_FILE: &str = "routers.js";
pub const TYPES_FILE: &str = "types.d.ts";

/// Fully defaulted, path-normalized configuration.
///
/// Constructed once per activation and not mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub module_id: String,

    /// Server entry as supplied (or defaulted), before anchoring at root.
    pub server: PathBuf,
    pub handler: PathBuf,
    pub configure: PathBuf,

    pub root: PathBuf,
    pub cache_dir: PathBuf,
    pub server_file: PathBuf,
    pub handler_file: PathBuf,
    pub configure_file: PathBuf,
    pub routers_file: PathBuf,
    pub types_file: PathBuf,

    /// URL prefix, always starting with `/`.
    pub route_base: String,
    pub dirs: Vec<DirRoute>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,

    pub mapper: MapperTable,
    pub mapper_list: Vec<Mapper>,

    /// Route directories, then cache dir, server file and handler file.
    pub watcher_list: Vec<PathBuf>,

    pub client_out_dir: PathBuf,
    pub server_out_dir: PathBuf,
    pub client_minify: Minify,
    pub server_minify: Minify,
    pub disable_build: bool,

    #[serde(skip)]
    pub client_build: BuildHook,

    #[serde(skip)]
    pub server_build: BuildHook,
}

/// Resolve against the current working directory when `root` is unset.
///
/// # Errors
///
/// Fails only when `root` is unset or relative and the working directory
/// cannot be read.
pub fn resolve(user: UserConfig) -> Result<ResolvedConfig> {
    let cwd = match &user.root {
        Some(root) if root.is_absolute() => root.clone(),
        _ => std::env::current_dir()?,
    };
    Ok(resolve_in(user, &cwd))
}

/// Resolve with `cwd` standing in for the working directory.
pub fn resolve_in(user: UserConfig, cwd: &Path) -> ResolvedConfig {
    let UserConfig {
        module_id,
        cache_dir,
        root,
        server,
        handler,
        configure,
        route_base,
        dirs,
        include,
        exclude,
        mapper,
        client_out_dir,
        server_out_dir,
        server_minify,
        client_minify,
        disable_build,
        client_build,
        server_build,
    } = user;

    let cache_dir = cache_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));
    let server = server.unwrap_or_else(|| join(&cache_dir, SERVER_FILE));
    let handler = handler.unwrap_or_else(|| join(&cache_dir, HANDLER_FILE));
    let configure = configure.unwrap_or_else(|| join(&cache_dir, CONFIGURE_FILE));

    let root = normalize_root(root.as_deref().unwrap_or(cwd), cwd);

    let dirs: Vec<DirRoute> = dirs
        .unwrap_or_else(|| vec![DirRoute::new(DEFAULT_API_DIR, "")])
        .into_iter()
        .map(|route| DirRoute {
            dir: join(&root, &route.dir),
            ..route
        })
        .collect();

    let mapper = merge_mapper(&mapper.unwrap_or_default());
    let route_base = url_path(route_base.as_deref().unwrap_or(DEFAULT_ROUTE_BASE));

    let client_out_dir = join(
        &root,
        client_out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CLIENT_OUT_DIR)),
    );
    let server_out_dir = join(
        &root,
        server_out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_SERVER_OUT_DIR)),
    );
    let cache_dir = join(&root, &cache_dir);

    let server_file = join(&root, &server);
    let handler_file = join(&root, &handler);
    let configure_file = join(&root, &configure);
    let routers_file = join(&cache_dir, ROUTERS_FILE);
    let types_file = join(&cache_dir, TYPES_FILE);

    let mapper_list = mapper_list(&mapper);

    let mut watcher_list: Vec<PathBuf> = dirs.iter().map(|route| route.dir.clone()).collect();
    watcher_list.push(cache_dir.clone());
    watcher_list.push(server_file.clone());
    watcher_list.push(handler_file.clone());

    debug!(
        root = %root.display(),
        cache_dir = %cache_dir.display(),
        dirs = dirs.len(),
        handlers = mapper_list.len(),
        "resolved api routing config"
    );

    ResolvedConfig {
        module_id: module_id.unwrap_or_else(|| DEFAULT_MODULE_ID.to_string()),
        server,
        handler,
        configure,
        root,
        cache_dir,
        server_file,
        handler_file,
        configure_file,
        routers_file,
        types_file,
        route_base,
        dirs,
        include: include.unwrap_or_else(|| DEFAULT_INCLUDE.map(String::from).to_vec()),
        exclude: exclude.unwrap_or_default(),
        mapper,
        mapper_list,
        watcher_list,
        client_out_dir,
        server_out_dir,
        client_minify: client_minify.unwrap_or(Minify::Enabled(true)),
        server_minify: server_minify.unwrap_or(Minify::Enabled(false)),
        disable_build: disable_build.unwrap_or(false),
        client_build: client_build.unwrap_or_default(),
        server_build: server_build.unwrap_or_default(),
    }
}

impl ResolvedConfig {
    /// Feed this configuration back in as user input.
    ///
    /// Resolving the result again yields the same paths.
    pub fn to_user_config(&self) -> UserConfig {
        UserConfig {
            module_id: Some(self.module_id.clone()),
            cache_dir: Some(self.cache_dir.clone()),
            root: Some(self.root.clone()),
            server: Some(self.server.clone()),
            handler: Some(self.handler.clone()),
            configure: Some(self.configure.clone()),
            route_base: Some(self.route_base.clone()),
            dirs: Some(self.dirs.clone()),
            include: Some(self.include.clone()),
            exclude: Some(self.exclude.clone()),
            mapper: Some(self.mapper.clone()),
            client_out_dir: Some(self.client_out_dir.clone()),
            server_out_dir: Some(self.server_out_dir.clone()),
            server_minify: Some(self.server_minify),
            client_minify: Some(self.client_minify),
            disable_build: Some(self.disable_build),
            client_build: Some(self.client_build.clone()),
            server_build: Some(self.server_build.clone()),
        }
    }

    /// Look up the handler bound to a method key.
    pub fn handler_for(&self, name: &str) -> Option<&str> {
        self.mapper.get(name).and_then(|value| value.handler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_root_is_anchored_at_cwd() {
        let config = resolve_in(UserConfig::default().with_root("app"), Path::new("/work"));
        assert_eq!(config.root, PathBuf::from("/work/app"));
        assert_eq!(config.cache_dir, PathBuf::from("/work/app/.api"));
    }

    #[test]
    fn server_defaults_follow_custom_cache_dir() {
        let user = UserConfig {
            cache_dir: Some(".generated".into()),
            ..Default::default()
        };
        let config = resolve_in(user, Path::new("/proj"));
        assert_eq!(config.server, PathBuf::from(".generated/server.js"));
        assert_eq!(config.server_file, PathBuf::from("/proj/.generated/server.js"));
        assert_eq!(config.types_file, PathBuf::from("/proj/.generated/types.d.ts"));
    }

    #[test]
    fn handler_for_skips_disabled_entries() {
        let mut mapper = MapperTable::new();
        mapper.insert("PUT".into(), crate::MapperValue::Disabled);
        let user = UserConfig {
            mapper: Some(mapper),
            ..Default::default()
        };
        let config = resolve_in(user, Path::new("/proj"));
        assert_eq!(config.handler_for("GET"), Some("get"));
        assert_eq!(config.handler_for("PUT"), None);
        assert_eq!(config.handler_for("OPTIONS"), None);
    }
}
