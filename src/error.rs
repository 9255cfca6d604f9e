//! Error types for the media relay

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling an update
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Channel error (Telegram API rejected a call or the request failed)
    #[error("channel error: {0}")]
    Channel(String),

    /// A single extraction attempt failed
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Cookie bundle could not be decoded or written
    #[error("cookies error: {0}")]
    Cookies(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
