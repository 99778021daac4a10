//! Conversion logic between DTOs and domain entities.

use crate::domain::{AnalysisReport, AnalyzeRequest, Diagnostic, ProtocolError, Severity};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::SeverityDto> for Severity {
    fn from(dto: dto::SeverityDto) -> Self {
        match dto {
            dto::SeverityDto::Warning => Severity::Warning,
            dto::SeverityDto::Error => Severity::Error,
            dto::SeverityDto::Info => Severity::Info,
            dto::SeverityDto::Other(label) => Severity::Other(label),
        }
    }
}

impl From<dto::DiagnosticDto> for Diagnostic {
    fn from(dto: dto::DiagnosticDto) -> Self {
        Self {
            line: dto.line,
            column: dto.column,
            message: dto.message,
            severity: dto.severity.into(),
            length: dto.length,
        }
    }
}

impl TryFrom<dto::AnalyzeRequestDto> for AnalyzeRequest {
    type Error = ProtocolError;

    fn try_from(dto: dto::AnalyzeRequestDto) -> Result<Self, Self::Error> {
        AnalyzeRequest::new(&dto.action, dto.language, dto.code)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Severity> for dto::SeverityDto {
    fn from(model: Severity) -> Self {
        match model {
            Severity::Warning => dto::SeverityDto::Warning,
            Severity::Error => dto::SeverityDto::Error,
            Severity::Info => dto::SeverityDto::Info,
            Severity::Other(label) => dto::SeverityDto::Other(label),
        }
    }
}

impl From<Diagnostic> for dto::DiagnosticDto {
    fn from(model: Diagnostic) -> Self {
        Self {
            line: model.line,
            column: model.column,
            message: model.message,
            severity: model.severity.into(),
            length: model.length,
        }
    }
}

impl From<AnalysisReport> for dto::AnalyzeResponseDto {
    fn from(model: AnalysisReport) -> Self {
        Self::AnalysisResult {
            errors: model.diagnostics.into_iter().map(Into::into).collect(),
            execution_time: model.execution_time_ms,
        }
    }
}
