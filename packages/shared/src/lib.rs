//! Utilities shared by the lintgate server and client.

pub mod logger;
pub mod time;
