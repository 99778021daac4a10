//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::{AnalyzeCodeUseCase, ConnectClientUseCase, GetStatusUseCase};

use super::{
    handler::{
        http::{api_index, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Analysis gateway server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(connect_client_usecase, analyze_code_usecase, get_status_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    connect_client_usecase: Arc<ConnectClientUseCase>,
    analyze_code_usecase: Arc<AnalyzeCodeUseCase>,
    get_status_usecase: Arc<GetStatusUseCase>,
}

impl Server {
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        analyze_code_usecase: Arc<AnalyzeCodeUseCase>,
        get_status_usecase: Arc<GetStatusUseCase>,
    ) -> Self {
        Self {
            connect_client_usecase,
            analyze_code_usecase,
            get_status_usecase,
        }
    }

    /// Build the router with all endpoints
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            analyze_code_usecase: self.analyze_code_usecase,
            get_status_usecase: self.get_status_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/health", get(health_check))
            .route("/", get(api_index))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the gateway until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Analysis gateway listening on {}", listener.local_addr()?);
        tracing::info!("WebSocket endpoint: ws://{}/ws", bind_addr);
        tracing::info!("Health check: http://{}/health", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
