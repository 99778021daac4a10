//! Infrastructure layer: concrete implementations of the domain interfaces.

pub mod dto;
pub mod engine;
pub mod identity;
pub mod rate_limiter;
pub mod repository;
