//! Domain layer: entities, value objects, errors and the interfaces the
//! gateway needs from its collaborators.
//!
//! Concrete implementations live in the infrastructure layer.

pub mod analysis_engine;
pub mod entity;
pub mod error;
pub mod identity_verifier;
pub mod rate_limiter;
pub mod repository;
pub mod value_object;

pub use analysis_engine::AnalysisEngine;
pub use entity::{AnalysisReport, AnalyzeRequest, Connection, Diagnostic, Severity};
pub use error::{EngineError, ProtocolError, ValueObjectError, VerifyError};
pub use identity_verifier::IdentityVerifier;
pub use rate_limiter::RateLimiter;
pub use repository::ConnectionRepository;
pub use value_object::{ConnectionId, Credential, Identity, Language, Timestamp};
