//! UseCase: analyze one validated request
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AnalyzeCodeUseCase::execute() メソッド
//! - レート制限 → 言語解決 → エンジン呼び出しの順序
//!
//! ### なぜこのテストが必要か
//! - レート制限で拒否されたリクエストがエンジンに到達しないことを保証する
//! - エンジンの失敗がエラーとして返り、再試行されないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：診断結果の返却
//! - 異常系：レート制限超過、未対応の言語、エンジンの失敗

use std::{sync::Arc, time::Instant};

use crate::domain::{
    AnalysisEngine, AnalysisReport, AnalyzeRequest, EngineError, Identity, Language, RateLimiter,
};

use super::error::AnalyzeError;

/// Code analysis use case
pub struct AnalyzeCodeUseCase {
    rate_limiter: Arc<dyn RateLimiter>,
    engine: Arc<dyn AnalysisEngine>,
}

impl AnalyzeCodeUseCase {
    pub fn new(rate_limiter: Arc<dyn RateLimiter>, engine: Arc<dyn AnalysisEngine>) -> Self {
        Self {
            rate_limiter,
            engine,
        }
    }

    /// Run a validated request on behalf of `identity`.
    ///
    /// The request counts against the identity's quota before the language
    /// is resolved. The engine is called at most once.
    ///
    /// # Errors
    ///
    /// * `AnalyzeError::RateLimited` - quota exhausted, engine not called
    /// * `AnalyzeError::Engine` - unsupported language or engine failure
    pub async fn execute(
        &self,
        identity: &Identity,
        request: AnalyzeRequest,
    ) -> Result<AnalysisReport, AnalyzeError> {
        if !self.rate_limiter.allow(identity) {
            tracing::warn!("Rate limit exceeded for user: {}", identity);
            return Err(AnalyzeError::RateLimited);
        }

        let language = Language::try_from(request.language.as_str())
            .map_err(|_| EngineError::UnsupportedLanguage(request.language.clone()))?;

        tracing::info!(
            "Processing analysis request from user {} for language: {}",
            identity,
            language
        );

        let started = Instant::now();
        let diagnostics = self.engine.analyze(language, &request.code).await?;
        let execution_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(AnalysisReport {
            diagnostics,
            execution_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        domain::{Diagnostic, Severity, analysis_engine::MockAnalysisEngine},
        infrastructure::rate_limiter::SlidingWindowRateLimiter,
    };

    fn identity() -> Identity {
        Identity::new("alice".to_string()).unwrap()
    }

    fn request(language: &str) -> AnalyzeRequest {
        AnalyzeRequest::new("analyze", language.to_string(), "x = 1".to_string()).unwrap()
    }

    fn limiter(limit: usize) -> Arc<SlidingWindowRateLimiter> {
        Arc::new(SlidingWindowRateLimiter::new(limit, Duration::from_secs(60)))
    }

    fn diagnostic() -> Diagnostic {
        Diagnostic {
            line: 1,
            column: 1,
            message: "E225 missing whitespace".to_string(),
            severity: Severity::Error,
            length: 1,
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        // テスト項目: エンジンの診断結果がそのまま返る
        // given (前提条件):
        let mut engine = MockAnalysisEngine::new();
        engine
            .expect_analyze()
            .with(eq(Language::Python), eq("x = 1"))
            .times(1)
            .returning(|_, _| Ok(vec![diagnostic()]));
        let usecase = AnalyzeCodeUseCase::new(limiter(60), Arc::new(engine));

        // when (操作):
        let report = usecase.execute(&identity(), request("python")).await.unwrap();

        // then (期待する結果):
        assert_eq!(report.diagnostics, vec![diagnostic()]);
    }

    #[tokio::test]
    async fn test_execute_alias_resolved_before_engine() {
        // テスト項目: 言語のエイリアスは正規の言語としてエンジンに渡される
        // given (前提条件):
        let mut engine = MockAnalysisEngine::new();
        engine
            .expect_analyze()
            .with(eq(Language::Go), eq("x = 1"))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let usecase = AnalyzeCodeUseCase::new(limiter(60), Arc::new(engine));

        // when (操作):
        let report = usecase.execute(&identity(), request("golang")).await;

        // then (期待する結果):
        assert!(report.is_ok());
    }

    #[tokio::test]
    async fn test_execute_rate_limited_skips_engine() {
        // テスト項目: レート制限を超えるとエンジンは呼ばれない
        // given (前提条件): 上限 1 回
        let mut engine = MockAnalysisEngine::new();
        engine
            .expect_analyze()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let usecase = AnalyzeCodeUseCase::new(limiter(1), Arc::new(engine));

        // when (操作):
        let first = usecase.execute(&identity(), request("python")).await;
        let second = usecase.execute(&identity(), request("python")).await;

        // then (期待する結果):
        assert!(first.is_ok());
        assert_eq!(second, Err(AnalyzeError::RateLimited));
        assert_eq!(
            second.unwrap_err().to_string(),
            "Rate limit exceeded. Please wait before sending more requests."
        );
    }

    #[tokio::test]
    async fn test_execute_unsupported_language() {
        // テスト項目: 未対応の言語はエンジンを呼ばずにエンジンエラーになる
        // given (前提条件):
        let mut engine = MockAnalysisEngine::new();
        engine.expect_analyze().times(0);
        let usecase = AnalyzeCodeUseCase::new(limiter(60), Arc::new(engine));

        // when (操作):
        let result = usecase.execute(&identity(), request("cobol")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(AnalyzeError::Engine(EngineError::UnsupportedLanguage(
                "cobol".to_string()
            )))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to analyze code: unsupported language: cobol"
        );
    }

    #[tokio::test]
    async fn test_execute_engine_failure_not_retried() {
        // テスト項目: エンジンの失敗はエラーとして返り、再試行されない
        // given (前提条件):
        let mut engine = MockAnalysisEngine::new();
        engine
            .expect_analyze()
            .times(1)
            .returning(|_, _| Err(EngineError::Transport("connection reset".to_string())));
        let usecase = AnalyzeCodeUseCase::new(limiter(60), Arc::new(engine));

        // when (操作):
        let result = usecase.execute(&identity(), request("dart")).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to analyze code: failed to invoke analyzer: connection reset"
        );
    }

    #[tokio::test]
    async fn test_execute_measures_duration() {
        // テスト項目: エンジン呼び出しの所要時間がミリ秒で記録される
        // given (前提条件):
        struct SlowEngine;

        #[async_trait::async_trait]
        impl AnalysisEngine for SlowEngine {
            async fn analyze(
                &self,
                _language: Language,
                _code: &str,
            ) -> Result<Vec<Diagnostic>, EngineError> {
                tokio::time::sleep(Duration::from_millis(30)).await;
                Ok(vec![])
            }
        }

        let usecase = AnalyzeCodeUseCase::new(limiter(60), Arc::new(SlowEngine));

        // when (操作):
        let report = usecase.execute(&identity(), request("cpp")).await.unwrap();

        // then (期待する結果):
        assert!(report.execution_time_ms >= 30);
    }
}
