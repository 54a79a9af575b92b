//! Tests for AppError type

use super::*;

#[test]
fn test_config_error_display() {
    let error = AppError::Config("config.toml: expected `]`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Config error"));
    assert!(msg.contains("expected `]`"));
}

#[test]
fn test_invalid_base_url_display() {
    let error = AppError::InvalidBaseUrl("shop: relative URL without a base".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid base URL shop: relative URL without a base"
    );
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let app_err = AppError::from(io_err);
    assert!(matches!(app_err, AppError::Io(_)));
    assert!(app_err.to_string().contains("test error"));
}
