//! Tests for configuration loading

use std::fs;

use tdd_assert::config::CONFIG_FILE;
use tdd_assert::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.assert.require_assertions);
    assert!(config.assert.catch_panics);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_partial_table_keeps_other_defaults() {
    let config = Config::from_toml_str("[assert]\ncatch_panics = false\n").unwrap();
    assert!(!config.assert.catch_panics);
    assert!(config.assert.require_assertions);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = Config::from_toml_str("[assert]\ncatch_panics = \"yes\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_roundtrip_through_toml() {
    let config = Config::from_toml_str("[assert]\nrequire_assertions = false\n").unwrap();
    let text = config.to_toml_string().unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    assert_eq!(Config::discover(temp.path()).unwrap(), Config::default());
}

#[test]
fn test_discover_reads_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[assert]\nrequire_assertions = false\n",
    )
    .unwrap();

    let config = Config::discover(temp.path()).unwrap();
    assert!(!config.assert.require_assertions);
}
