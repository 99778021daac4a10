//! Identity verification interface.

use async_trait::async_trait;

use super::{Credential, Identity, VerifyError};

/// Resolves a bearer credential to a stable identity.
///
/// Any failure, including network errors, means the client is unauthorized.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &Credential) -> Result<Identity, VerifyError>;
}
