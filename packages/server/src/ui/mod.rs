//! HTTP / WebSocket front end.

mod handler;
mod server;
mod signal;
pub mod state;

pub use handler::websocket::{SessionEnd, run_session};
pub use server::Server;
