//! WebSocket connection handlers.
//!
//! `websocket_handler` is the connection manager: it authenticates before
//! the upgrade and hands the upgraded socket to a per-connection task.
//! `run_session` is the message protocol loop run by that task.

use std::{fmt::Display, sync::Arc};

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::Response,
};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use serde::Deserialize;

use crate::{
    domain::{AnalysisReport, AnalyzeRequest, Identity, ProtocolError},
    infrastructure::dto::websocket::{AnalyzeRequestDto, AnalyzeResponseDto},
    ui::state::AppState,
    usecase::{AnalyzeCodeUseCase, AnalyzeError, ConnectError, ConnectionSession},
};

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub token: Option<String>,
}

/// Why a session loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Peer sent a close frame
    PeerClosed,
    /// Inbound stream ended without a close frame
    StreamEnded,
    ReadFailed(String),
    WriteFailed(String),
}

/// Credential from `?token=`, falling back to `Authorization: Bearer`.
fn extract_credential(query: ConnectQuery, headers: &HeaderMap) -> Option<String> {
    query.token.filter(|token| !token.is_empty()).or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    })
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, &'static str)> {
    let credential = extract_credential(query, &headers);

    let identity = match state.connect_client_usecase.authenticate(credential).await {
        Ok(identity) => identity,
        Err(ConnectError::MissingCredential) => {
            tracing::warn!("Missing auth token in WebSocket request");
            return Err((StatusCode::UNAUTHORIZED, "Missing auth token"));
        }
        Err(e) => {
            tracing::warn!("Failed to verify token: {}", e);
            return Err((StatusCode::UNAUTHORIZED, "Invalid auth token"));
        }
    };

    // Registration happens inside the upgrade callback: a failed upgrade
    // never reaches the registry.
    let identity_for_failure = identity.clone();
    Ok(ws
        .on_failed_upgrade(move |e| {
            tracing::warn!(
                "Failed to upgrade connection for user {}: {}",
                identity_for_failure,
                e
            );
        })
        .on_upgrade(move |socket| handle_socket(socket, state, identity)))
}

/// Per-connection task body. Runs until the session loop ends; dropping the
/// session on return deregisters the connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, identity: Identity) {
    let session = state.connect_client_usecase.register(identity);
    let (sender, receiver) = socket.split();

    let end = run_session(receiver, sender, &state.analyze_code_usecase, &session).await;
    match &end {
        SessionEnd::PeerClosed | SessionEnd::StreamEnded => {
            tracing::debug!("Session {} ended: {:?}", session.id(), end)
        }
        SessionEnd::ReadFailed(e) => {
            tracing::warn!("WebSocket read error for user {}: {}", session.identity(), e)
        }
        SessionEnd::WriteFailed(e) => {
            tracing::error!(
                "Failed to send response to user {}: {}",
                session.identity(),
                e
            )
        }
    }
}

/// Message protocol loop for one connection.
///
/// Reads one frame at a time and answers every text or binary frame with
/// exactly one response before reading the next. Malformed, invalid,
/// rate-limited and failed requests are answered with an `error` response and
/// the loop continues. Only a read failure, a close frame or a write failure
/// ends the loop.
pub async fn run_session<R, W, E>(
    mut receiver: R,
    mut sender: W,
    usecase: &AnalyzeCodeUseCase,
    session: &ConnectionSession,
) -> SessionEnd
where
    R: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
    W: Sink<Message> + Unpin,
    W::Error: Display,
{
    while let Some(frame) = receiver.next().await {
        let result = match frame {
            Ok(Message::Text(text)) => {
                process_payload(usecase, session, text.as_str().as_bytes()).await
            }
            Ok(Message::Binary(bytes)) => process_payload(usecase, session, &bytes).await,
            Ok(Message::Close(_)) => {
                tracing::info!("Client '{}' requested close", session.identity());
                return SessionEnd::PeerClosed;
            }
            // Ping/pong is handled by the WebSocket implementation
            Ok(_) => continue,
            Err(e) => return SessionEnd::ReadFailed(e.to_string()),
        };

        let analyzed = result.is_ok();
        let response = match result {
            Ok(report) => {
                tracing::info!(
                    "Sent analysis result to user {}: {} errors, {}ms",
                    session.identity(),
                    report.diagnostics.len(),
                    report.execution_time_ms
                );
                AnalyzeResponseDto::from(report)
            }
            Err(e) => AnalyzeResponseDto::error(e.to_string()),
        };

        let json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => return SessionEnd::WriteFailed(e.to_string()),
        };
        if let Err(e) = sender.send(Message::Text(json.into())).await {
            return SessionEnd::WriteFailed(e.to_string());
        }

        if analyzed {
            session.touch();
        }
    }

    SessionEnd::StreamEnded
}

/// Parse, validate and execute one inbound payload
async fn process_payload(
    usecase: &AnalyzeCodeUseCase,
    session: &ConnectionSession,
    payload: &[u8],
) -> Result<AnalysisReport, AnalyzeError> {
    let dto: AnalyzeRequestDto = serde_json::from_slice(payload).map_err(|e| {
        tracing::warn!(
            "Failed to parse request from user {}: {}",
            session.identity(),
            e
        );
        ProtocolError::InvalidFormat
    })?;

    let request = AnalyzeRequest::try_from(dto)?;
    let result = usecase.execute(session.identity(), request).await;
    if let Err(AnalyzeError::Engine(e)) = &result {
        tracing::error!(
            "Failed to invoke analyzer for user {}: {}",
            session.identity(),
            e
        );
    }
    result
}
