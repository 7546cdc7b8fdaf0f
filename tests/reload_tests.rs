// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for `reload` and `reload_field` against live sources.

mod common;

use common::{temp_config, EnvGuard};
use greenhorn::prelude::*;
use std::fs;

#[test]
#[cfg(feature = "json")]
fn test_reload_removes_loaded_fields() {
    let file = temp_config("json", r#"{"key1": "value1", "key2": "value2"}"#);
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();
    assert_eq!(store.len(), 2);

    store.reload().unwrap();

    assert!(store.is_empty());
    assert_eq!(store.state(), StoreState::Empty);
}

#[test]
#[cfg(feature = "json")]
fn test_reload_leaves_stale_fields() {
    let file = temp_config("json", r#"{"key1": "value1", "key2": "value2"}"#);
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();

    // key2 disappears from the source
    fs::write(file.path(), r#"{"key1": "value1"}"#).unwrap();
    store.reload().unwrap();

    assert!(!store.has(&FieldName::from("key1")));
    assert_eq!(store.field("key2"), Some(&FieldValue::from("value2")));
    assert_eq!(store.state(), StoreState::Populated);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.state(), StoreState::Empty);
}

#[test]
#[cfg(feature = "toml")]
fn test_reload_then_load_picks_up_changes() {
    let file = temp_config("toml", "key = \"initial_value\"\n");
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();

    fs::write(file.path(), "key = \"updated_value\"\n").unwrap();

    // Value stays the old one until the store reads the source again
    assert_eq!(store.field("key"), Some(&FieldValue::from("initial_value")));

    store.reload().unwrap();
    store.load().unwrap();
    assert_eq!(store.field("key"), Some(&FieldValue::from("updated_value")));
}

#[test]
#[cfg(feature = "ini")]
fn test_reload_fails_on_broken_file() {
    let file = temp_config("ini", "[server]\nhost = a\n");
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();
    let before = store.fields().clone();

    fs::write(file.path(), "host = a\n").unwrap();

    assert!(matches!(
        store.reload(),
        Err(ConfigError::SourceParse { .. })
    ));
    assert_eq!(store.fields(), &before);
}

#[test]
#[cfg(feature = "json")]
fn test_reload_fails_when_file_removed() {
    let file = temp_config("json", r#"{"a": 1}"#);
    let path = file.path().to_path_buf();
    let mut store = ConfigurationStore::from_path(&path).unwrap();
    store.load().unwrap();

    drop(file);

    assert!(matches!(store.reload(), Err(ConfigError::SourceRead { .. })));
    assert_eq!(store.field("a"), Some(&FieldValue::from(1)));
}

#[test]
#[cfg(feature = "ini")]
fn test_reload_field_updates_only_that_field() {
    let file = temp_config("ini", "[server]\nhost = a\n[client]\nhost = b\n");
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();

    fs::write(file.path(), "[server]\nhost = c\n[client]\nhost = d\n").unwrap();
    store.reload_field(&FieldName::from("server")).unwrap();

    let host = |name: &str| store.field(name).and_then(|s| s.get("host")).cloned();
    assert_eq!(host("server"), Some(FieldValue::from("c")));
    assert_eq!(host("client"), Some(FieldValue::from("b")));
}

#[test]
#[cfg(feature = "toml")]
fn test_reload_field_adds_new_field() {
    let file = temp_config("toml", "a = 1\n");
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();

    fs::write(file.path(), "a = 1\nb = [true]\n").unwrap();
    store.reload_field(&FieldName::from("b")).unwrap();

    assert_eq!(
        store.field("b"),
        Some(&FieldValue::List(vec![FieldValue::from(true)]))
    );
}

#[test]
#[cfg(feature = "json")]
fn test_reload_field_missing_leaves_store_unchanged() {
    let file = temp_config("json", r#"{"present": 1}"#);
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();
    store.load().unwrap();
    let before = store.fields().clone();

    let err = store.reload_field(&FieldName::from("missing")).unwrap_err();

    assert!(matches!(err, ConfigError::FieldNotFound { .. }));
    assert_eq!(store.fields(), &before);
}

#[test]
#[cfg(feature = "json")]
fn test_reload_field_on_fresh_store() {
    let file = temp_config("json", r#"{"a": "x", "b": "y"}"#);
    let mut store = ConfigurationStore::from_path(file.path()).unwrap();

    store.reload_field(&FieldName::from("a")).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.state(), StoreState::Populated);
}

#[test]
#[cfg(feature = "env")]
fn test_environment_reload_field() {
    let mut guard = EnvGuard::new();
    guard.set("GREENHORN_RELOAD_TEST_VAR", "initial");

    let mut store = ConfigurationStore::for_environment();
    store.load().unwrap();
    assert_eq!(
        store.field("GREENHORN_RELOAD_TEST_VAR"),
        Some(&FieldValue::from("initial"))
    );

    guard.set("GREENHORN_RELOAD_TEST_VAR", "updated");
    store
        .reload_field(&FieldName::from("GREENHORN_RELOAD_TEST_VAR"))
        .unwrap();

    assert_eq!(
        store.field("GREENHORN_RELOAD_TEST_VAR"),
        Some(&FieldValue::from("updated"))
    );
}

#[test]
#[cfg(feature = "env")]
fn test_environment_reload_leaves_removed_variable() {
    let mut guard = EnvGuard::new();
    guard.set("GREENHORN_RELOAD_TEST_STALE", "value");

    let mut store = ConfigurationStore::for_environment();
    store.load().unwrap();

    guard.remove("GREENHORN_RELOAD_TEST_STALE");
    store.reload().unwrap();

    assert_eq!(
        store.field("GREENHORN_RELOAD_TEST_STALE"),
        Some(&FieldValue::from("value"))
    );
    assert!(matches!(
        store.reload_field(&FieldName::from("GREENHORN_RELOAD_TEST_STALE")),
        Err(ConfigError::FieldNotFound { .. })
    ));
}
