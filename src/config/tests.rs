//! Tests for config functionality.

use crate::config::Config;
use crate::error::LockstampError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.stamp_suffix, ".stamp");
    assert!(config.sync_on_write);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
sync_on_write: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(!config.sync_on_write);
    assert_eq!(config.stamp_suffix, ".stamp");
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
stamp_suffix: ".ts"
sync_on_write: false
log_filter: "lockstamp=debug"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.stamp_suffix, ".ts");
    assert!(!config.sync_on_write);
    assert_eq!(config.log_filter, "lockstamp=debug");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
stamp_suffix: ".ts"
future_setting: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.stamp_suffix, ".ts");
}

#[test]
fn test_empty_suffix_fails_validation() {
    let err = Config::from_yaml("stamp_suffix: \"\"").unwrap_err();
    assert!(matches!(err, LockstampError::ConfigError(_)));
    assert!(err.to_string().contains("stamp_suffix must be non-empty"));
}

#[test]
fn test_suffix_with_separator_fails_validation() {
    let err = Config::from_yaml("stamp_suffix: \"/stamp\"").unwrap_err();
    assert!(err.to_string().contains("path separator"));
}

#[test]
fn test_invalid_log_filter_fails_validation() {
    let err = Config::from_yaml("log_filter: \"lockstamp=notalevel\"").unwrap_err();
    assert!(err.to_string().contains("invalid log_filter"));
}

#[test]
fn test_malformed_yaml_fails() {
    let err = Config::from_yaml("sync_on_write: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        stamp_suffix: ".ts".to_string(),
        sync_on_write: false,
        log_filter: "debug".to_string(),
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lockstamp.yaml");
    std::fs::write(&path, "stamp_suffix: \".sentinel\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.stamp_suffix, ".sentinel");
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, LockstampError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_sentinel_for_appends_suffix() {
    let config = Config::default();
    assert_eq!(
        config.sentinel_for(Path::new("/data/users.tbl")),
        Path::new("/data/users.tbl.stamp")
    );
}
