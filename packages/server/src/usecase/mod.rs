//! UseCase layer: orchestrates domain objects for each gateway operation.

mod analyze_code;
mod connect_client;
mod error;
mod get_status;

pub use analyze_code::AnalyzeCodeUseCase;
pub use connect_client::{ConnectClientUseCase, ConnectionSession};
pub use error::{AnalyzeError, ConnectError};
pub use get_status::{GatewayStatus, GetStatusUseCase};
