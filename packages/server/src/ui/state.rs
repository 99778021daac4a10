//! Shared application state.

use std::sync::Arc;

use crate::usecase::{AnalyzeCodeUseCase, ConnectClientUseCase, GetStatusUseCase};

/// Shared application state
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub analyze_code_usecase: Arc<AnalyzeCodeUseCase>,
    pub get_status_usecase: Arc<GetStatusUseCase>,
}
