//! Build customization hooks for the client and server targets.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Opaque build-tool configuration handed to a [`BuildHook`].
pub type BuildOptions = Value;

type HookFn = dyn Fn(BuildOptions) -> BuildOptions + Send + Sync;

/// Transformation applied to the build-tool configuration of one target.
///
/// Defaults to the identity function. Cloning is cheap; clones share the
/// same underlying closure.
///
/// ```
/// use apiroute_config::BuildHook;
/// use serde_json::json;
///
/// let hook = BuildHook::new(|mut options| {
///     options["minify"] = json!(false);
///     options
/// });
/// assert_eq!(hook.apply(json!({ "minify": true })), json!({ "minify": false }));
/// assert_eq!(BuildHook::identity().apply(json!(1)), json!(1));
/// ```
#[derive(Clone)]
pub struct BuildHook(Arc<HookFn>);

impl BuildHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(BuildOptions) -> BuildOptions + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn identity() -> Self {
        Self::new(|options| options)
    }

    pub fn apply(&self, options: BuildOptions) -> BuildOptions {
        (self.0)(options)
    }
}

impl Default for BuildHook {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for BuildHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BuildHook(..)")
    }
}
