/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type V20Result<T> = Result<T, AppError>;

/// Main error type for the library
///
/// Transport and JSON failures are carried unchanged as the error source. Unknown
/// transaction kinds and unregistered HTTP statuses are not errors and never end up
/// here.
#[derive(Debug)]
pub enum AppError {
    /// HTTP transport failure
    Network(reqwest::Error),
    /// Malformed JSON in a response body or stream line
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// Caller supplied something the request cannot be built from
    InvalidInput(String),
    /// A record that is structurally not what the decoder accepts
    Deserialization(String),
    /// Non-success status where no body can be passed through, e.g. on stream open
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
