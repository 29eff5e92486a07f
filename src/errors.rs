use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for store, session, and configuration layers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email `{0}` is already registered")]
    EmailTaken(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid month key: {0}")]
    InvalidMonth(String),
}

pub type Result<T> = StdResult<T, CoreError>;
