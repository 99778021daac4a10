//! Domain error types.
//!
//! The `Display` text of [`ProtocolError`] and [`EngineError`] is sent to
//! clients verbatim, so changing it changes the wire protocol.

use thiserror::Error;

/// Value object construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("credential must not be empty")]
    EmptyCredential,

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Inbound message that cannot be turned into an analysis request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Payload is not a JSON object of the expected shape
    #[error("Invalid request format")]
    InvalidFormat,

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Missing language field")]
    MissingLanguage,

    #[error("Missing code field")]
    MissingCode,
}

/// Identity verification failures. All of them reject the connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("identity service is not configured")]
    NotConfigured,

    #[error("identity verification timed out")]
    Timeout,

    #[error("failed to reach identity service: {0}")]
    Transport(String),

    #[error("invalid token: {0}")]
    Rejected(String),

    #[error("failed to decode user: {0}")]
    Decode(String),
}

/// Analysis engine failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("analysis endpoint not configured for language: {0}")]
    NotConfigured(String),

    #[error("failed to invoke analyzer: {0}")]
    Transport(String),

    #[error("analyzer error: {0}")]
    Backend(String),

    #[error("failed to parse analyzer response: {0}")]
    Decode(String),
}

