//! Error types for the edit-lock policy

use thiserror::Error;

/// Main error type for all lock and approval operations
#[derive(Error, Debug)]
pub enum EditLockError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),

    #[error("Lock denied: {0}")]
    LockDenied(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for edit-lock operations
pub type Result<T> = std::result::Result<T, EditLockError>;
