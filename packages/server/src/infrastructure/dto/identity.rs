//! Identity service DTOs.

use serde::Deserialize;

/// User returned by the `/auth/v1/user` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}
