//! Code analysis gateway server.
//!
//! Accepts authenticated WebSocket connections and forwards analysis
//! requests to the configured analysis engine.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lintgate-server -- --use-mock-auth --use-mock-engine
//! SUPABASE_URL=https://xxx.supabase.co SUPABASE_ANON_KEY=... cargo run --bin lintgate-server
//! ```

use std::sync::Arc;

use clap::Parser;
use lintgate_server::{
    config::{Args, Config, EngineConfig, IdentityConfig},
    domain::{AnalysisEngine, IdentityVerifier, RateLimiter},
    infrastructure::{
        engine::{CannedAnalysisEngine, HttpAnalysisEngine},
        identity::{SupabaseIdentityVerifier, TrustingIdentityVerifier},
        rate_limiter::{SlidingWindowRateLimiter, spawn_sweeper},
        repository::InMemoryConnectionRepository,
    },
    ui::Server,
    usecase::{AnalyzeCodeUseCase, ConnectClientUseCase, GetStatusUseCase},
};
use lintgate_shared::{logger::setup_logger, time::SystemClock};

fn build_verifier(
    config: &Config,
) -> Result<Arc<dyn IdentityVerifier>, Box<dyn std::error::Error>> {
    match &config.identity {
        IdentityConfig::Mock => {
            tracing::warn!("Mock auth enabled: every token is accepted");
            Ok(Arc::new(TrustingIdentityVerifier))
        }
        IdentityConfig::Supabase { url, api_key } => {
            tracing::info!("Verifying tokens against {}", url);
            Ok(Arc::new(SupabaseIdentityVerifier::new(
                url.clone(),
                api_key.clone(),
                config.auth_timeout,
            )?))
        }
    }
}

fn build_engine(
    config: &Config,
) -> Result<Arc<dyn AnalysisEngine>, Box<dyn std::error::Error>> {
    match &config.engine {
        EngineConfig::Mock => {
            tracing::warn!("Mock analysis engine enabled: backends are not contacted");
            Ok(Arc::new(CannedAnalysisEngine))
        }
        EngineConfig::Http { endpoints, timeout } => {
            let configured = endpoints.configured();
            if configured.is_empty() {
                tracing::warn!("No analyzer endpoints configured; every analysis will fail");
            } else {
                tracing::info!("Analyzer endpoints configured for {:?}", configured);
            }
            Ok(Arc::new(HttpAnalysisEngine::new(endpoints.clone(), *timeout)?))
        }
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting lintgate-server ({})", config.environment);

    // Initialize dependencies in order:
    // 1. Registry and rate limiter
    // 2. Collaborators (identity verification, analysis engine)
    // 3. UseCases
    // 4. Server

    // 1. Registry and rate limiter
    let clock = Arc::new(SystemClock);
    let repository = Arc::new(InMemoryConnectionRepository::new());
    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(SlidingWindowRateLimiter::new(
        config.rate_limit.limit,
        config.rate_limit.window,
    ));
    let sweeper = spawn_sweeper(rate_limiter.clone(), config.rate_limit.sweep_period);
    tracing::info!(
        "Rate limit: {} requests per {:?}, sweep every {:?}",
        config.rate_limit.limit,
        config.rate_limit.window,
        config.rate_limit.sweep_period
    );

    // 2. Collaborators
    let verifier = build_verifier(&config)?;
    let engine = build_engine(&config)?;

    // 3. UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        verifier,
        repository.clone(),
        clock.clone(),
        config.auth_timeout,
    ));
    let analyze_code_usecase = Arc::new(AnalyzeCodeUseCase::new(rate_limiter, engine));
    let get_status_usecase = Arc::new(GetStatusUseCase::new(repository, clock));

    // 4. Server
    let server = Server::new(
        connect_client_usecase,
        analyze_code_usecase,
        get_status_usecase,
    );
    let result = server.run(config.host, config.port).await;
    sweeper.abort();
    result
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = match Config::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
