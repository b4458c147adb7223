//! Property-based tests for resolver invariants.

use apiroute_config::{BUILTIN_MAPPER, DirRoute, MapperTable, MapperValue, UserConfig, resolve_in};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

/// Relative, root-anchorable path like `src/api/v1`.
fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_-]{0,7}", 1..=4).prop_map(|parts| parts.join("/"))
}

fn absolute_root() -> impl Strategy<Value = String> {
    relative_path().prop_map(|path| format!("/{path}"))
}

/// Either form a user may write: `src/api` or `/srv/api`.
fn any_path() -> impl Strategy<Value = String> {
    prop_oneof![relative_path(), absolute_root()]
}

fn dir_routes() -> impl Strategy<Value = Vec<DirRoute>> {
    prop::collection::vec(
        (any_path(), "[a-z]{0,6}").prop_map(|(dir, route)| DirRoute::new(dir, route)),
        0..=5,
    )
}

fn mapper_value() -> impl Strategy<Value = MapperValue> {
    prop_oneof![
        Just(MapperValue::Disabled),
        "[a-z][a-zA-Z]{0,8}".prop_map(MapperValue::Handler),
    ]
}

fn mapper_overrides() -> impl Strategy<Value = MapperTable> {
    let key = prop_oneof![
        Just("default".to_string()),
        Just("GET".to_string()),
        Just("PUT".to_string()),
        Just("POST".to_string()),
        Just("PATCH".to_string()),
        Just("DELETE".to_string()),
        "[A-Z]{3,7}",
    ];
    prop::collection::vec((key, mapper_value()), 0..=8)
        .prop_map(|entries| entries.into_iter().collect())
}

fn user_config() -> impl Strategy<Value = UserConfig> {
    (
        absolute_root(),
        prop::option::of(any_path()),
        prop::option::of(dir_routes()),
        prop::option::of(mapper_overrides()),
        prop::option::of(any_path()),
        prop::option::of(any_path()),
    )
        .prop_map(|(root, cache_dir, dirs, mapper, server, client_out_dir)| UserConfig {
            root: Some(PathBuf::from(root)),
            cache_dir: cache_dir.map(PathBuf::from),
            dirs,
            mapper,
            server: server.map(PathBuf::from),
            client_out_dir: client_out_dir.map(PathBuf::from),
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: watcher list covers every dir plus three generated paths
    #[test]
    fn prop_watcher_list_length(user in user_config()) {
        let config = resolve_in(user, Path::new("/cwd"));
        prop_assert_eq!(config.watcher_list.len(), config.dirs.len() + 3);
    }

    /// Property: root-derived paths are absolute and start with root
    #[test]
    fn prop_paths_are_rooted(user in user_config()) {
        let config = resolve_in(user, Path::new("/cwd"));
        let root = &config.root;

        prop_assert!(root.is_absolute());
        for path in [
            &config.cache_dir,
            &config.server_file,
            &config.handler_file,
            &config.configure_file,
            &config.client_out_dir,
            &config.server_out_dir,
        ] {
            prop_assert!(path.is_absolute());
            prop_assert!(path.starts_with(root), "{} not under {}", path.display(), root.display());
        }
        for route in &config.dirs {
            prop_assert!(route.dir.starts_with(root));
        }
        prop_assert!(config.routers_file.starts_with(&config.cache_dir));
        prop_assert!(config.types_file.starts_with(&config.cache_dir));
    }

    /// Property: built-in keys survive any override set
    #[test]
    fn prop_builtin_keys_present(user in user_config()) {
        let config = resolve_in(user, Path::new("/cwd"));
        for (name, _) in BUILTIN_MAPPER {
            prop_assert!(config.mapper.contains_key(name));
        }
    }

    /// Property: mapper list holds exactly the enabled table entries
    #[test]
    fn prop_mapper_list_matches_enabled_entries(user in user_config()) {
        let config = resolve_in(user, Path::new("/cwd"));
        let enabled: Vec<&str> = config
            .mapper
            .iter()
            .filter(|(_, value)| value.is_enabled())
            .map(|(name, _)| name.as_str())
            .collect();
        let listed: Vec<&str> = config.mapper_list.iter().map(|m| m.name.as_str()).collect();
        prop_assert_eq!(listed, enabled);

        for (name, value) in &config.mapper {
            if *value == MapperValue::Disabled {
                prop_assert!(config.mapper_list.iter().all(|m| &m.name != name));
            }
        }
    }

    /// Property: resolving a resolved config changes no path field
    #[test]
    fn prop_resolution_is_idempotent(user in user_config()) {
        let first = resolve_in(user, Path::new("/cwd"));
        let second = resolve_in(first.to_user_config(), Path::new("/other"));

        prop_assert_eq!(&first.root, &second.root);
        prop_assert_eq!(&first.cache_dir, &second.cache_dir);
        prop_assert_eq!(&first.dirs, &second.dirs);
        prop_assert_eq!(&first.server_file, &second.server_file);
        prop_assert_eq!(&first.handler_file, &second.handler_file);
        prop_assert_eq!(&first.configure_file, &second.configure_file);
        prop_assert_eq!(&first.routers_file, &second.routers_file);
        prop_assert_eq!(&first.types_file, &second.types_file);
        prop_assert_eq!(&first.client_out_dir, &second.client_out_dir);
        prop_assert_eq!(&first.server_out_dir, &second.server_out_dir);
        prop_assert_eq!(&first.route_base, &second.route_base);
        prop_assert_eq!(&first.watcher_list, &second.watcher_list);
    }
}
