//! Result formatting for terminal display.

use lintgate_server::infrastructure::dto::websocket::{
    AnalyzeResponseDto, DiagnosticDto, SeverityDto,
};

/// Formats gateway responses for the terminal
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format one diagnostic as `line:column [severity] message`
    pub fn format_diagnostic(diagnostic: &DiagnosticDto) -> String {
        let severity = match &diagnostic.severity {
            SeverityDto::Warning => "warning",
            SeverityDto::Error => "error",
            SeverityDto::Info => "info",
            SeverityDto::Other(label) => label.as_str(),
        };
        format!(
            "{}:{} [{}] {}",
            diagnostic.line, diagnostic.column, severity, diagnostic.message
        )
    }

    /// Format a full response, one diagnostic per line followed by a summary
    pub fn format_response(response: &AnalyzeResponseDto) -> String {
        match response {
            AnalyzeResponseDto::AnalysisResult {
                errors,
                execution_time,
            } => {
                if errors.is_empty() {
                    return format!("No issues found ({} ms)\n", execution_time);
                }
                let mut output = String::new();
                for diagnostic in errors {
                    output.push_str(&Self::format_diagnostic(diagnostic));
                    output.push('\n');
                }
                let noun = if errors.len() == 1 { "issue" } else { "issues" };
                output.push_str(&format!(
                    "{} {} found ({} ms)\n",
                    errors.len(),
                    noun,
                    execution_time
                ));
                output
            }
            AnalyzeResponseDto::Error { message } => format!("Error: {}\n", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostic(line: u32, column: u32, severity: SeverityDto, message: &str) -> DiagnosticDto {
        DiagnosticDto {
            line,
            column,
            message: message.to_string(),
            severity,
            length: 1,
        }
    }

    #[test]
    fn test_format_diagnostic() {
        // テスト項目: 診断が line:column [severity] message 形式になる
        // given (前提条件):
        let diagnostic = diagnostic(3, 7, SeverityDto::Error, "undefined name 'x'");

        // when (操作):
        let result = ResultFormatter::format_diagnostic(&diagnostic);

        // then (期待する結果):
        assert_eq!(result, "3:7 [error] undefined name 'x'");
    }

    #[test]
    fn test_format_diagnostic_with_backend_specific_severity() {
        // テスト項目: 未知の severity はそのままの表記で表示される
        let diagnostic = diagnostic(4, 2, SeverityDto::Other("hint".to_string()), "use let");

        let result = ResultFormatter::format_diagnostic(&diagnostic);

        assert_eq!(result, "4:2 [hint] use let");
    }

    #[test]
    fn test_format_response_with_diagnostics() {
        // テスト項目: 診断ごとに 1 行、最後に件数と実行時間が表示される
        // given (前提条件):
        let response = AnalyzeResponseDto::AnalysisResult {
            errors: vec![
                diagnostic(1, 1, SeverityDto::Warning, "unused import"),
                diagnostic(2, 5, SeverityDto::Info, "prefer const"),
            ],
            execution_time: 42,
        };

        // when (操作):
        let result = ResultFormatter::format_response(&response);

        // then (期待する結果):
        assert_eq!(
            result,
            "1:1 [warning] unused import\n2:5 [info] prefer const\n2 issues found (42 ms)\n"
        );
    }

    #[test]
    fn test_format_response_without_diagnostics() {
        // テスト項目: 診断がない場合は問題なしと表示される
        let response = AnalyzeResponseDto::AnalysisResult {
            errors: vec![],
            execution_time: 5,
        };

        let result = ResultFormatter::format_response(&response);

        assert_eq!(result, "No issues found (5 ms)\n");
    }

    #[test]
    fn test_format_error_response() {
        // テスト項目: エラー応答はメッセージがそのまま表示される
        let response = AnalyzeResponseDto::error("Missing code field");

        let result = ResultFormatter::format_response(&response);

        assert_eq!(result, "Error: Missing code field\n");
    }
}
