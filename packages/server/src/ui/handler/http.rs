//! HTTP API endpoint handlers.

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State};
use lintgate_shared::time::timestamp_to_rfc3339;

use crate::{
    infrastructure::dto::http::{ApiIndexDto, HealthDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let status = state.get_status_usecase.execute();
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: timestamp_to_rfc3339(status.checked_at.value()),
        active_connections: status.active_connections,
    })
}

/// API index listing the available endpoints
pub async fn api_index() -> Json<ApiIndexDto> {
    let endpoints = BTreeMap::from([
        ("/ws".to_string(), "WebSocket endpoint".to_string()),
        ("/health".to_string(), "Health check".to_string()),
    ]);
    Json(ApiIndexDto {
        message: "Code Analysis Gateway API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
