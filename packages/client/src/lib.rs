//! Command-line client for the lintgate analysis gateway.

pub mod domain;
pub mod error;
pub mod formatter;
mod runner;
pub mod session;
mod ui;

pub use runner::{ClientOptions, run_client};
