//! Integration tests for the cloudmount-config public API.
//!
//! These tests verify complete serialize/deserialize round-trips of the
//! mount configuration through every supported document format, and that
//! the serialized key names match the external contract exactly.

use cloudmount_config::{parse_config, ConfigFormat, LogRotateConfig, MountConfig, Severity};

/// A configuration with every field moved off its default.
fn populated_config() -> MountConfig {
    let mut config = MountConfig::new();
    config.write.create_empty_file = true;
    config.logging.severity = Severity::Warning;
    config.logging.format = "text".to_string();
    config.logging.file_path = "/var/log/cloudmount/mount.log".to_string();
    config.logging.log_rotate = LogRotateConfig {
        max_file_size_mb: 128,
        backup_file_count: 0,
        compress: false,
    };
    config
}

#[test]
fn test_yaml_round_trip_default_config() {
    let original = MountConfig::new();

    let doc = serde_yaml::to_string(&original).expect("serialize must succeed");
    let restored = parse_config(&doc, ConfigFormat::Yaml).expect("parse must succeed");

    assert_eq!(original, restored);
}

#[test]
fn test_yaml_round_trip_populated_config() {
    let original = populated_config();

    let doc = serde_yaml::to_string(&original).expect("serialize must succeed");
    let restored = parse_config(&doc, ConfigFormat::Yaml).expect("parse must succeed");

    assert_eq!(original, restored);
}

#[test]
fn test_json_round_trip_populated_config() {
    let original = populated_config();

    let doc = serde_json::to_string(&original).expect("serialize must succeed");
    let restored = parse_config(&doc, ConfigFormat::Json).expect("parse must succeed");

    assert_eq!(original, restored);
}

#[test]
fn test_toml_round_trip_populated_config() {
    let original = populated_config();

    let doc = toml::to_string(&original).expect("serialize must succeed");
    let restored = parse_config(&doc, ConfigFormat::Toml).expect("parse must succeed");

    assert_eq!(original, restored);
}

#[test]
fn test_serialized_yaml_uses_contract_key_names() {
    // The key names and nesting are an external contract and must be
    // preserved exactly.
    let doc = serde_yaml::to_string(&MountConfig::new()).expect("serialize must succeed");

    assert!(doc.contains("write:"));
    assert!(doc.contains("create-empty-file:"));
    assert!(doc.contains("logging:"));
    assert!(doc.contains("severity:"));
    assert!(doc.contains("format:"));
    assert!(doc.contains("file-path:"));
    assert!(doc.contains("log-rotate:"));
    assert!(doc.contains("max-file-size-mb:"));
    assert!(doc.contains("backup-file-count:"));
    assert!(doc.contains("compress:"));
}

#[test]
fn test_zero_backup_count_survives_round_trip() {
    // backup-file-count: 0 means "retain all"; the round trip must not
    // renormalize it to the default of 10.
    let original = populated_config();
    assert!(original.logging.log_rotate.retains_all_backups());

    let doc = serde_yaml::to_string(&original).expect("serialize must succeed");
    let restored = parse_config(&doc, ConfigFormat::Yaml).expect("parse must succeed");

    assert_eq!(restored.logging.log_rotate.backup_file_count, 0);
    assert!(restored.logging.log_rotate.retains_all_backups());
}

#[test]
fn test_yaml_and_json_documents_parse_identically() {
    let yaml_doc = "\
logging:
  severity: error
  log-rotate:
    max-file-size-mb: 256
";
    let json_doc = r#"{"logging": {"severity": "error", "log-rotate": {"max-file-size-mb": 256}}}"#;

    let from_yaml = parse_config(yaml_doc, ConfigFormat::Yaml).expect("yaml parse");
    let from_json = parse_config(json_doc, ConfigFormat::Json).expect("json parse");

    assert_eq!(from_yaml, from_json);
}
