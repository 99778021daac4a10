//! WebSocket message DTOs.

use serde::{Deserialize, Deserializer, Serialize};

/// `null` and absent string fields both read as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inbound analysis request.
///
/// Missing or `null` fields deserialize as empty strings so that
/// validation, not parsing, reports which field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequestDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
}

/// Diagnostic severity on the wire.
///
/// Backends may report severities beyond the three known ones; those are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityDto {
    Warning,
    Error,
    Info,
    #[serde(untagged)]
    Other(String),
}

impl Default for SeverityDto {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Diagnostic on the wire (also the shape analysis backends return).
///
/// Fields a backend leaves out read as zero or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDto {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub severity: SeverityDto,
    #[serde(default)]
    pub length: u32,
}

/// Outbound response; exactly one shape per message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyzeResponseDto {
    AnalysisResult {
        errors: Vec<DiagnosticDto>,
        #[serde(rename = "executionTime")]
        execution_time: u64,
    },
    Error {
        message: String,
    },
}

impl AnalyzeResponseDto {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_missing_fields_default_to_empty() {
        // テスト項目: 欠けているフィールドは空文字列として読み込まれる
        // given (前提条件):
        let raw = r#"{"action":"lint"}"#;

        // when (操作):
        let dto: AnalyzeRequestDto = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert_eq!(dto.action, "lint");
        assert!(dto.language.is_empty());
        assert!(dto.code.is_empty());

        // null も空文字列として扱われる
        let dto: AnalyzeRequestDto =
            serde_json::from_str(r#"{"action":"analyze","language":null,"code":"x"}"#).unwrap();
        assert_eq!(dto.action, "analyze");
        assert!(dto.language.is_empty());
        assert_eq!(dto.code, "x");
    }

    #[test]
    fn test_request_wrong_field_type_is_rejected() {
        // テスト項目: 型が違うフィールドはパースエラーになる
        let result = serde_json::from_str::<AnalyzeRequestDto>(r#"{"action":42}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_lenient_backend_diagnostic() {
        // テスト項目: 欠けたフィールドや未知の severity を持つ診断も読み込める
        // given (前提条件):
        let raw = r#"{"line":1,"column":1,"message":"m","severity":"hint"}"#;

        // when (操作):
        let dto: DiagnosticDto = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert_eq!(dto.severity, SeverityDto::Other("hint".to_string()));
        assert_eq!(dto.length, 0);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"line": 1, "column": 1, "message": "m", "severity": "hint", "length": 0})
        );

        let dto: DiagnosticDto = serde_json::from_str(r#"{"severity":"warning"}"#).unwrap();
        assert_eq!(dto.severity, SeverityDto::Warning);
        assert_eq!((dto.line, dto.column), (0, 0));
        assert!(dto.message.is_empty());
    }

    #[test]
    fn test_analysis_result_wire_shape() {
        // テスト項目: analysis_result は type / errors / executionTime を持つ
        // given (前提条件):
        let response = AnalyzeResponseDto::AnalysisResult {
            errors: vec![DiagnosticDto {
                line: 3,
                column: 7,
                message: "unused variable".to_string(),
                severity: SeverityDto::Warning,
                length: 1,
            }],
            execution_time: 12,
        };

        // when (操作):
        let value = serde_json::to_value(&response).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "type": "analysis_result",
                "errors": [{
                    "line": 3,
                    "column": 7,
                    "message": "unused variable",
                    "severity": "warning",
                    "length": 1
                }],
                "executionTime": 12
            })
        );
    }

    #[test]
    fn test_empty_result_keeps_errors_field() {
        // テスト項目: 診断が 0 件でも errors フィールドは出力される
        let response = AnalyzeResponseDto::AnalysisResult {
            errors: vec![],
            execution_time: 0,
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["errors"], json!([]));
    }

    #[test]
    fn test_error_wire_shape() {
        // テスト項目: error は type と message のみを持つ
        let response = AnalyzeResponseDto::error("Missing code field");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({"type": "error", "message": "Missing code field"})
        );
    }
}
