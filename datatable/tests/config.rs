use std::fs;
use std::path::PathBuf;

use datatable::config::{
    load_user_config, ConfigError, Configuration, CONFIG_FILE_NAME, DEFAULT_ROWS_PER_PAGE,
};
use serde_json::json;
use tempfile::TempDir;

/// Write `contents` to an rc file inside a fresh temp dir.
fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_rows_per_page() {
    assert_eq!(Configuration::default().rows_per_page(), 10);
    assert_eq!(DEFAULT_ROWS_PER_PAGE, 10);
}

#[test]
fn test_defaults_document_shape() {
    assert_eq!(
        Configuration::defaults(),
        json!({ "components": { "table": { "defaultProps": { "rowsPerPage": 10 } } } })
    );
}

#[test]
fn test_missing_file_means_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    let config = Configuration::load_from(&path).unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(load_user_config(&path).unwrap(), json!({}));
}

#[test]
fn test_load_from_working_directory() {
    // Tests run from the package root, which has no rc file
    let config = Configuration::load().unwrap();
    assert_eq!(config.rows_per_page(), 10);
    assert_eq!(Configuration::load_or_default().rows_per_page(), 10);
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
fn test_user_file_overrides_rows_per_page() {
    let (_temp_dir, path) = temp_config(r#"{"components":{"table":{"defaultProps":{"rowsPerPage":25}}}}"#);
    let config = Configuration::load_from(&path).unwrap();
    assert_eq!(config.rows_per_page(), 25);
}

#[test]
fn test_unrelated_keys_keep_defaults() {
    let (_temp_dir, path) = temp_config(r#"{"components":{"button":{"defaultProps":{"size":"lg"}}},"theme":"dark"}"#);
    let config = Configuration::load_from(&path).unwrap();
    assert_eq!(config.rows_per_page(), 10);
}

#[test]
fn test_partial_table_section_merges() {
    let config = Configuration::from_overrides(json!({
        "components": { "table": { "defaultProps": {}, "extra": true } }
    }))
    .unwrap();
    assert_eq!(config.rows_per_page(), 10);
}

#[test]
fn test_null_rows_per_page_falls_back() {
    let config = Configuration::from_overrides(json!({
        "components": { "table": { "defaultProps": { "rowsPerPage": null } } }
    }))
    .unwrap();
    assert_eq!(config.components.table.default_props.rows_per_page, None);
    assert_eq!(config.rows_per_page(), 10);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_json_is_parse_error() {
    let (_temp_dir, path) = temp_config("{ not json");
    let err = Configuration::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_non_object_is_rejected() {
    let (_temp_dir, path) = temp_config("[1, 2, 3]");
    let err = Configuration::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotAnObject(_)));
}

#[test]
fn test_zero_rows_per_page_is_invalid() {
    let err = Configuration::from_overrides(json!({
        "components": { "table": { "defaultProps": { "rowsPerPage": 0 } } }
    }))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("rowsPerPage"));
}

#[test]
fn test_wrong_type_is_invalid() {
    for bad in [json!("ten"), json!(-5), json!(2.5)] {
        let err = Configuration::from_overrides(json!({
            "components": { "table": { "defaultProps": { "rowsPerPage": bad } } }
        }))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "accepted {bad}");
    }
}

#[test]
fn test_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Configuration::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
