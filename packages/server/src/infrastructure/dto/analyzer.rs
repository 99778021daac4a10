//! Analysis backend DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::DiagnosticDto;

/// Body posted to an analysis backend
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerRequestDto<'a> {
    pub language: &'a str,
    pub code: &'a str,
}

/// Body returned by an analysis backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerResponseDto {
    #[serde(default)]
    pub errors: Vec<DiagnosticDto>,
}
