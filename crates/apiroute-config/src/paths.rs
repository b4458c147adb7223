//! Slash-separated path helpers.
//!
//! Every path the resolver hands out is lexically cleaned and rendered with
//! forward slashes, so the same input yields the same output on every
//! platform and re-resolving a resolved path is a no-op.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Render a path with forward slashes.
pub fn slash(path: impl AsRef<Path>) -> String {
    let text = path.as_ref().to_string_lossy();
    if text.contains('\\') {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Join `segment` onto `base` and clean the result.
///
/// A segment that already lies under `base` is kept as is. Any other
/// absolute segment is anchored under `base` with its root stripped, so
/// `/other` joined onto `/proj` becomes `/proj/other`.
///
/// ```
/// use apiroute_config::paths::join;
/// use std::path::PathBuf;
///
/// assert_eq!(join("/proj", "src/../api"), PathBuf::from("/proj/api"));
/// assert_eq!(join("/proj", "/proj/api"), PathBuf::from("/proj/api"));
/// assert_eq!(join("/proj", "/other"), PathBuf::from("/proj/other"));
/// ```
pub fn join(base: impl AsRef<Path>, segment: impl AsRef<Path>) -> PathBuf {
    let base = PathBuf::from(slash(base)).clean();
    let segment = PathBuf::from(slash(segment)).clean();
    if segment.is_absolute() && segment.starts_with(&base) {
        return PathBuf::from(slash(segment));
    }

    let relative: PathBuf = segment
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();
    PathBuf::from(slash(base.join(relative).clean()))
}

/// Normalize a project root to an absolute, slash-separated form.
///
/// Relative roots are anchored at `cwd`.
pub fn normalize_root(root: impl AsRef<Path>, cwd: impl AsRef<Path>) -> PathBuf {
    let root = PathBuf::from(slash(root));
    if root.is_absolute() {
        PathBuf::from(slash(root.clean()))
    } else {
        join(cwd, root)
    }
}

/// Anchor a URL path segment at `/`.
///
/// A trailing separator on the input is kept.
///
/// ```
/// use apiroute_config::paths::url_path;
///
/// assert_eq!(url_path("api"), "/api");
/// assert_eq!(url_path("/v1/api/"), "/v1/api/");
/// assert_eq!(url_path(""), "/");
/// ```
pub fn url_path(segment: &str) -> String {
    let mut path = slash(join("/", segment));
    if segment.ends_with(['/', '\\']) && !path.ends_with('/') {
        path.push('/');
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_converts_backslashes() {
        assert_eq!(slash(r"src\api\users"), "src/api/users");
        assert_eq!(slash("src/api"), "src/api");
    }

    #[test]
    fn join_collapses_dot_segments() {
        assert_eq!(join("/proj", "./src/./api"), PathBuf::from("/proj/src/api"));
        assert_eq!(join("/proj/web", "../.api"), PathBuf::from("/proj/.api"));
    }

    #[test]
    fn join_accepts_backslash_segments() {
        assert_eq!(join("/proj", r"src\api"), PathBuf::from("/proj/src/api"));
    }

    #[test]
    fn join_is_idempotent_on_absolute_segments() {
        let once = join("/proj", ".api/server.js");
        let twice = join("/proj", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn join_anchors_foreign_absolute_segments() {
        assert_eq!(join("/proj", "/other"), PathBuf::from("/proj/other"));
        assert_eq!(join("/proj", "/tmp/c"), PathBuf::from("/proj/tmp/c"));
        assert_eq!(join("/proj", r"\other\api"), PathBuf::from("/proj/other/api"));
        // component-wise prefix only
        assert_eq!(join("/proj", "/project"), PathBuf::from("/proj/project"));
    }

    #[test]
    fn join_of_relative_parts_stays_relative() {
        assert_eq!(join(".api", "server.js"), PathBuf::from(".api/server.js"));
    }

    #[test]
    fn normalize_root_anchors_relative_roots() {
        assert_eq!(normalize_root("app", "/work"), PathBuf::from("/work/app"));
        assert_eq!(normalize_root("/proj/", "/work"), PathBuf::from("/proj"));
        assert_eq!(normalize_root("/proj/a/..", "/work"), PathBuf::from("/proj"));
    }

    #[test]
    fn url_path_keeps_trailing_separator() {
        assert_eq!(url_path("api/"), "/api/");
        assert_eq!(url_path(r"v1\api\"), "/v1/api/");
        assert_eq!(url_path("/api"), "/api");
        assert_eq!(url_path("/"), "/");
        assert_eq!(url_path("/api/"), url_path(&url_path("api/")));
    }
}
