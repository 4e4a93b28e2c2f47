//! Error types for emptyarray-sync.

use thiserror::Error;

/// Result type alias using emptyarray-sync's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for emptyarray-sync operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed before a response arrived
    #[error("Request error: {0}")]
    Request(String),

    /// Remote API answered with a non-2xx status
    #[error("Request to {endpoint} failed with status {status}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
