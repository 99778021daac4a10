//! HTTP API response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `/health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// RFC 3339 (UTC)
    pub timestamp: String,
    pub active_connections: usize,
}

/// `/` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndexDto {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}
