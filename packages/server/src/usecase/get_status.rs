//! UseCase: gateway status for health reporting

use std::sync::Arc;

use lintgate_shared::time::Clock;

use crate::domain::{ConnectionRepository, Timestamp};

/// Read-only snapshot of the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayStatus {
    pub active_connections: usize,
    pub checked_at: Timestamp,
}

/// Gateway status use case. Never mutates anything.
pub struct GetStatusUseCase {
    repository: Arc<dyn ConnectionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetStatusUseCase {
    pub fn new(repository: Arc<dyn ConnectionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub fn execute(&self) -> GatewayStatus {
        GatewayStatus {
            active_connections: self.repository.count(),
            checked_at: Timestamp::new(self.clock.now_millis()),
        }
    }
}
