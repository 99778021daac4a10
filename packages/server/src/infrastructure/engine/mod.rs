//! Analysis engine implementations.
//!
//! - `http`: forwards requests to per-language analysis backends
//! - `canned`: deterministic single-diagnostic engine (mock mode)

pub mod canned;
pub mod http;

pub use canned::CannedAnalysisEngine;
pub use http::{AnalyzerEndpoints, HttpAnalysisEngine};
