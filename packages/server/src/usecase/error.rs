//! UseCase error types.

use thiserror::Error;

use crate::domain::{EngineError, ProtocolError, VerifyError};

/// Connection attempt rejected before the upgrade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("Missing auth token")]
    MissingCredential,

    #[error("Invalid auth token: {0}")]
    Unauthorized(#[from] VerifyError),
}

/// Per-message failure. Reported to the client; never closes the connection.
///
/// The `Display` text is the `message` of the `error` response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Rate limit exceeded. Please wait before sending more requests.")]
    RateLimited,

    #[error("Failed to analyze code: {0}")]
    Engine(#[from] EngineError),
}
