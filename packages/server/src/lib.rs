//! WebSocket code analysis gateway library.
//!
//! Authenticates WebSocket clients, validates their analysis requests,
//! enforces per-identity rate limits and forwards requests to an external
//! analysis engine, answering over the same connection.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// configuration
pub mod config;
