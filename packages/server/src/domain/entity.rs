//! Domain entities.

use super::{
    error::ProtocolError,
    value_object::{ConnectionId, Identity, Timestamp},
};

/// The only action clients may request
pub const ANALYZE_ACTION: &str = "analyze";

/// One live client session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub identity: Identity,
    pub connected_at: Timestamp,
    /// Updated after every successfully answered analysis request
    pub last_activity: Timestamp,
}

impl Connection {
    pub fn new(id: ConnectionId, identity: Identity, connected_at: Timestamp) -> Self {
        Self {
            id,
            identity,
            connected_at,
            last_activity: connected_at,
        }
    }
}

/// Severity reported by an analysis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Info,
    /// Any other label, passed through unchanged
    Other(String),
}

/// A single finding reported by an analysis backend.
///
/// The gateway passes these through without interpreting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub severity: Severity,
    pub length: u32,
}

/// A validated analysis request.
///
/// `language` is kept as sent by the client; resolving it to a supported
/// [`Language`](super::Language) is the engine's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub language: String,
    pub code: String,
}

impl AnalyzeRequest {
    /// Validate the raw fields of an inbound message.
    ///
    /// Checks run in order: action, language, code. The first failing check
    /// decides the error.
    pub fn new(action: &str, language: String, code: String) -> Result<Self, ProtocolError> {
        if action != ANALYZE_ACTION {
            return Err(ProtocolError::UnknownAction(action.to_string()));
        }
        if language.is_empty() {
            return Err(ProtocolError::MissingLanguage);
        }
        if code.is_empty() {
            return Err(ProtocolError::MissingCode);
        }
        Ok(Self { language, code })
    }
}

/// Successful analysis outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Wall-clock duration of the engine call in milliseconds
    pub execution_time_ms: u64,
}
