use reqwest::StatusCode;
use std::error::Error;
use v20_client::error::AppError;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("path parameter accountID is not bound".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: path parameter accountID is not bound"
    );
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::UNAUTHORIZED);
    assert!(error.to_string().contains("401"));
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("stream record is not a JSON object".to_string());
    assert!(error.to_string().starts_with("deserialization error"));
}

#[test]
fn test_app_error_from_json_keeps_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
    let error = AppError::from(io_error);
    assert!(matches!(error, AppError::Io(_)));
    assert!(error.to_string().contains("closed"));
}

#[test]
fn test_app_error_without_source() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.source().is_none());
}
