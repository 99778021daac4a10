//! Error types for the analysis client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The gateway answered the upgrade with 401
    #[error("Authentication failed: the server rejected the token")]
    Unauthorized,

    #[error("Invalid gateway URL: {0}")]
    InvalidUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected response from server: {0}")]
    UnexpectedResponse(String),

    #[error("Failed to read {path}: {message}")]
    ReadFile { path: String, message: String },

    #[error("Cannot determine language for {0}; pass --language")]
    UnknownLanguage(String),
}
