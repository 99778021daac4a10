//! Mock engine mode.

use async_trait::async_trait;

use crate::domain::{AnalysisEngine, Diagnostic, EngineError, Language, Severity};

/// Returns one fixed warning for every request without contacting a backend
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedAnalysisEngine;

#[async_trait]
impl AnalysisEngine for CannedAnalysisEngine {
    async fn analyze(
        &self,
        language: Language,
        _code: &str,
    ) -> Result<Vec<Diagnostic>, EngineError> {
        Ok(vec![Diagnostic {
            line: 1,
            column: 1,
            message: format!("Mock error for {} (testing mode)", language),
            severity: Severity::Warning,
            length: 10,
        }])
    }
}
