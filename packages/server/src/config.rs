//! Gateway configuration.
//!
//! Every option can be given as a command-line flag or through the
//! environment variable named next to it. The parsed [`Args`] are validated
//! once at startup into a [`Config`].

use std::time::Duration;

use clap::{Parser, builder::BoolishValueParser};
use thiserror::Error;

use crate::infrastructure::{
    engine::{AnalyzerEndpoints, http::DEFAULT_ANALYZER_TIMEOUT},
    identity::supabase::DEFAULT_VERIFY_TIMEOUT,
};

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL and SUPABASE_ANON_KEY are required unless USE_MOCK_AUTH is set")]
    MissingIdentityService,

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("rate limit sweep period ({sweep:?}) must not be shorter than the window ({window:?})")]
    SweepShorterThanWindow { sweep: Duration, window: Duration },
}

#[derive(Parser, Debug, Clone)]
#[command(name = "lintgate-server")]
#[command(about = "Code analysis gateway with per-user rate limiting", long_about = None)]
pub struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Deployment environment name (informational)
    #[arg(long = "env", env = "ENV", default_value = "development")]
    pub environment: String,

    /// Base URL of the identity service
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// API key sent to the identity service
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    /// Accept any token (development only)
    #[arg(long, env = "USE_MOCK_AUTH", value_parser = BoolishValueParser::new())]
    pub use_mock_auth: bool,

    /// Answer every request with a fixed diagnostic instead of calling analyzers
    #[arg(long, env = "USE_MOCK_LAMBDA", value_parser = BoolishValueParser::new())]
    pub use_mock_engine: bool,

    /// Analyzer URL for TypeScript and JavaScript
    #[arg(long, env = "ANALYZER_URL_TYPESCRIPT")]
    pub analyzer_url_typescript: Option<String>,

    /// Analyzer URL for Python
    #[arg(long, env = "ANALYZER_URL_PYTHON")]
    pub analyzer_url_python: Option<String>,

    /// Analyzer URL for Dart
    #[arg(long, env = "ANALYZER_URL_DART")]
    pub analyzer_url_dart: Option<String>,

    /// Analyzer URL for Go
    #[arg(long, env = "ANALYZER_URL_GO")]
    pub analyzer_url_go: Option<String>,

    /// Analyzer URL for C++
    #[arg(long, env = "ANALYZER_URL_CPP")]
    pub analyzer_url_cpp: Option<String>,

    /// Timeout for one analyzer call, in seconds
    #[arg(
        long,
        env = "ANALYZER_TIMEOUT_SECS",
        default_value_t = DEFAULT_ANALYZER_TIMEOUT.as_secs()
    )]
    pub analyzer_timeout_secs: u64,

    /// Timeout for identity verification, in seconds
    #[arg(long, env = "AUTH_TIMEOUT_SECS", default_value_t = DEFAULT_VERIFY_TIMEOUT.as_secs())]
    pub auth_timeout_secs: u64,

    /// Requests allowed per user within the window
    #[arg(long, env = "RATE_LIMIT_REQUESTS", default_value = "60")]
    pub rate_limit_requests: usize,

    /// Rate limit window, in seconds
    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS", default_value = "60")]
    pub rate_limit_window_secs: u64,

    /// Interval between sweeps of idle rate limit state, in seconds
    #[arg(long, env = "RATE_LIMIT_SWEEP_SECS", default_value = "120")]
    pub rate_limit_sweep_secs: u64,
}

/// How clients are authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityConfig {
    Mock,
    Supabase { url: String, api_key: String },
}

/// Which analysis engine serves requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineConfig {
    Mock,
    Http {
        endpoints: AnalyzerEndpoints,
        timeout: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: usize,
    pub window: Duration,
    pub sweep_period: Duration,
}

/// Validated gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub identity: IdentityConfig,
    pub auth_timeout: Duration,
    pub engine: EngineConfig,
    pub rate_limit: RateLimitConfig,
}

fn non_zero(value: u64, name: &'static str) -> Result<Duration, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero(name));
    }
    Ok(Duration::from_secs(value))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let identity = if args.use_mock_auth {
            IdentityConfig::Mock
        } else {
            match (non_empty(args.supabase_url), non_empty(args.supabase_anon_key)) {
                (Some(url), Some(api_key)) => IdentityConfig::Supabase { url, api_key },
                _ => return Err(ConfigError::MissingIdentityService),
            }
        };

        let engine = if args.use_mock_engine {
            EngineConfig::Mock
        } else {
            EngineConfig::Http {
                endpoints: AnalyzerEndpoints {
                    typescript: non_empty(args.analyzer_url_typescript),
                    python: non_empty(args.analyzer_url_python),
                    dart: non_empty(args.analyzer_url_dart),
                    go: non_empty(args.analyzer_url_go),
                    cpp: non_empty(args.analyzer_url_cpp),
                },
                timeout: non_zero(args.analyzer_timeout_secs, "ANALYZER_TIMEOUT_SECS")?,
            }
        };

        if args.rate_limit_requests == 0 {
            return Err(ConfigError::Zero("RATE_LIMIT_REQUESTS"));
        }
        let window = non_zero(args.rate_limit_window_secs, "RATE_LIMIT_WINDOW_SECS")?;
        let sweep_period = non_zero(args.rate_limit_sweep_secs, "RATE_LIMIT_SWEEP_SECS")?;
        if sweep_period < window {
            return Err(ConfigError::SweepShorterThanWindow {
                sweep: sweep_period,
                window,
            });
        }

        Ok(Config {
            host: args.host,
            port: args.port,
            environment: args.environment,
            identity,
            auth_timeout: non_zero(args.auth_timeout_secs, "AUTH_TIMEOUT_SECS")?,
            engine,
            rate_limit: RateLimitConfig {
                limit: args.rate_limit_requests,
                window,
                sweep_period,
            },
        })
    }
}
