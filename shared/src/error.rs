use thiserror::Error;

/// Errors raised when parsing boundary date strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Date does not exist: {0}")]
    OutOfRange(String),
}

/// Errors raised by session persistence
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage unavailable: {0}")]
    Storage(String),
    #[error("Corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),
}
