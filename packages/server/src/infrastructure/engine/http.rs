//! Analysis over HTTP.
//!
//! Each language family is served by its own backend URL (for example a
//! function URL per linter). The engine posts `{"language", "code"}` as JSON
//! and expects `{"errors": [...]}` back. JavaScript is served by the
//! TypeScript backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{AnalysisEngine, Diagnostic, EngineError, Language},
    infrastructure::dto::analyzer::{AnalyzerRequestDto, AnalyzerResponseDto},
};

/// Default timeout for one analysis call
pub const DEFAULT_ANALYZER_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend URL per language family. `None` means not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerEndpoints {
    pub typescript: Option<String>,
    pub python: Option<String>,
    pub dart: Option<String>,
    pub go: Option<String>,
    pub cpp: Option<String>,
}

impl AnalyzerEndpoints {
    /// Backend URL serving `language`
    pub fn url_for(&self, language: Language) -> Option<&str> {
        let url = match language {
            Language::TypeScript | Language::JavaScript => &self.typescript,
            Language::Python => &self.python,
            Language::Dart => &self.dart,
            Language::Go => &self.go,
            Language::Cpp => &self.cpp,
        };
        url.as_deref().filter(|url| !url.is_empty())
    }

    /// Languages that have a backend configured
    pub fn configured(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|&language| self.url_for(language).is_some())
            .collect()
    }
}

/// Forwards analysis requests to per-language HTTP backends
pub struct HttpAnalysisEngine {
    http: reqwest::Client,
    endpoints: AnalyzerEndpoints,
}

impl HttpAnalysisEngine {
    /// # Errors
    ///
    /// Returns `EngineError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoints: AnalyzerEndpoints, timeout: Duration) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        Ok(Self { http, endpoints })
    }
}

#[async_trait]
impl AnalysisEngine for HttpAnalysisEngine {
    async fn analyze(
        &self,
        language: Language,
        code: &str,
    ) -> Result<Vec<Diagnostic>, EngineError> {
        let url = self
            .endpoints
            .url_for(language)
            .ok_or_else(|| EngineError::NotConfigured(language.to_string()))?;

        let body = AnalyzerRequestDto {
            language: language.as_str(),
            code,
        };
        tracing::debug!(
            "Invoking {} analyzer at {} ({} bytes)",
            language,
            url,
            code.len()
        );

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(EngineError::Backend(format!("{} {}", status, text)));
        }

        let parsed: AnalyzerResponseDto = response
            .json()
            .await
            .map_err(|e| EngineError::Decode(e.to_string()))?;

        Ok(parsed.errors.into_iter().map(Into::into).collect())
    }
}
