//! Tests for config file loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_valid_file() {
    let file = write_config("[autocomplete]\ndebounce_ms = 50\n");

    let result = load_config(Some(file.path()));

    assert!(result.warning.is_none());
    assert_eq!(result.config.autocomplete.debounce_ms, 50);
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let file = write_config("[endpoint\nbase_url = ");

    let result = load_config(Some(file.path()));

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("should warn");
    assert!(warning.contains("Config error"));
}

#[test]
fn test_missing_explicit_file_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let result = load_config(Some(&path));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_read_config_reports_path() {
    let file = write_config("log_file = 3");

    let error = read_config(file.path()).unwrap_err();

    assert!(error.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_default_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("storefront-autocomplete/config.toml"));
    }
}
