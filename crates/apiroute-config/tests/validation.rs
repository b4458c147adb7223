//! Tests for schema and filesystem validation.

use apiroute_config::{
    ConfigError, ConfigValidator, DirRoute, FsValidator, SchemaValidator, UserConfig, resolve_in,
    validate_fs, validate_schema,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn default_config_passes_schema_validation() {
    let config = resolve_in(UserConfig::default(), Path::new("/proj"));
    assert!(validate_schema(&config).is_ok());
}

#[test]
fn handler_names_must_be_identifiers() {
    let user = UserConfig::from_value(json!({ "mapper": { "GET": "get-user" } })).unwrap();
    let config = resolve_in(user, Path::new("/proj"));

    let err = SchemaValidator.validate(&config).unwrap_err();
    match err {
        ConfigError::InvalidHandlerName { key, name } => {
            assert_eq!(key, "GET");
            assert_eq!(name, "get-user");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn disabled_entries_are_not_checked() {
    let user = UserConfig::from_value(json!({ "mapper": { "PATCH": false, "$any": "$handler" } }))
        .unwrap();
    let config = resolve_in(user, Path::new("/proj"));
    assert!(validate_schema(&config).is_ok());
}

#[test]
fn empty_module_id_is_rejected() {
    let user = UserConfig::from_value(json!({ "module_id": " " })).unwrap();
    let config = resolve_in(user, Path::new("/proj"));
    assert!(matches!(
        validate_schema(&config),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn fs_validator_requires_route_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/api")).unwrap();

    let user = UserConfig {
        dirs: Some(vec![
            DirRoute::new("src/api", ""),
            DirRoute::new("src/missing", "missing"),
        ]),
        ..Default::default()
    }
    .with_root(dir.path());
    let config = resolve_in(user, dir.path());

    match FsValidator.validate(&config) {
        Err(ConfigError::DirNotFound { path }) => assert!(path.ends_with("src/missing")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn fs_validator_accepts_existing_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/api")).unwrap();

    let config = resolve_in(UserConfig::default().with_root(dir.path()), dir.path());
    assert!(validate_fs(&config).is_ok());
}
