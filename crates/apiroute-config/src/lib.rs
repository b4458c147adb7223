//! Configuration resolution for file-system based API routing.
//!
//! A partial [`UserConfig`] goes in, a fully resolved [`ResolvedConfig`] comes
//! out: absolute paths, generated cache-file locations, the HTTP method to
//! handler mapping and the list of paths to watch. Router generation, module
//! serving and request dispatch consume the resolved value and live elsewhere.
//!
//! # Example
//!
//! ```
//! use apiroute_config::{resolve_in, UserConfig};
//! use std::path::{Path, PathBuf};
//!
//! let config = resolve_in(UserConfig::default(), Path::new("/proj"));
//! assert_eq!(config.cache_dir, PathBuf::from("/proj/.api"));
//! assert_eq!(config.routers_file, PathBuf::from("/proj/.api/routers.js"));
//! ```

pub mod discovery;
pub mod error;
pub mod hooks;
pub mod mapper;
pub mod paths;
pub mod resolve;
pub mod user;
pub mod validation;

pub use error::*;
pub use hooks::*;
pub use mapper::*;
pub use resolve::*;
pub use user::*;

pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
