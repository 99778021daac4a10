//! Analysis engine interface.

use async_trait::async_trait;

use super::{Diagnostic, EngineError, Language};

/// Executes code analysis for one language.
///
/// Called exactly once per accepted request; the gateway never retries. Any
/// timeout is the implementation's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    async fn analyze(&self, language: Language, code: &str)
    -> Result<Vec<Diagnostic>, EngineError>;
}
