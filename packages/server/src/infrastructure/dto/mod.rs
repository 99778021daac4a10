//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `websocket`: client-facing WebSocket messages
//! - `http`: HTTP API responses
//! - `analyzer`: analysis backend request/response bodies
//! - `identity`: identity service responses

pub mod analyzer;
pub mod conversion;
pub mod http;
pub mod identity;
pub mod websocket;
