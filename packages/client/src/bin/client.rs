//! Code analysis client.
//!
//! Sends code to the analysis gateway and prints the diagnostics.
//! With `--file` a single file is analyzed; otherwise an interactive editor
//! starts where an empty line submits the code typed so far.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lintgate-client -- --token dev-token --file src/main.go
//! cargo run --bin lintgate-client -- -t dev-token -l python
//! ```

use std::path::PathBuf;

use clap::Parser;
use lintgate_client::{ClientOptions, error::ClientError, run_client};
use lintgate_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "lintgate-client")]
#[command(about = "Send code to the lintgate gateway and print diagnostics", long_about = None)]
struct Args {
    /// WebSocket endpoint of the gateway
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Access token presented to the gateway
    #[arg(short = 't', long, env = "LINTGATE_TOKEN", hide_env_values = true)]
    token: String,

    /// Language of the code (inferred from the file extension with --file)
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Analyze this file and exit
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let options = ClientOptions {
        url: args.url,
        token: args.token,
        language: args.language,
        file: args.file,
    };

    if let Err(e) = run_client(options).await {
        if matches!(e, ClientError::Unauthorized) {
            tracing::error!("{}. Check the --token value.", e);
        } else {
            tracing::error!("Client error: {}", e);
        }
        std::process::exit(1);
    }
}
