//! Identity verification over HTTP.
//!
//! Sends `GET {base_url}/auth/v1/user` with the client's bearer token and the
//! project API key. Only a 200 response carrying a user id is a success.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{Credential, Identity, IdentityVerifier, VerifyError},
    infrastructure::dto::identity::AuthUserDto,
};

/// Default timeout for a verification round trip
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Verifies credentials against a Supabase-compatible auth endpoint
pub struct SupabaseIdentityVerifier {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseIdentityVerifier {
    /// Create a verifier for the auth service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::NotConfigured` if the URL or key is empty, and
    /// `VerifyError::Transport` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, VerifyError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.into();
        if base_url.is_empty() || api_key.is_empty() {
            return Err(VerifyError::NotConfigured);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerifyError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseIdentityVerifier {
    async fn verify(&self, credential: &Credential) -> Result<Identity, VerifyError> {
        let url = self.user_url();
        tracing::debug!("Verifying token {} against {}", credential.redacted(), url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(credential.as_str())
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerifyError::Timeout
                } else {
                    VerifyError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(VerifyError::Rejected(format!("{} {}", status, body)));
        }

        let user: AuthUserDto = response
            .json()
            .await
            .map_err(|e| VerifyError::Decode(e.to_string()))?;

        let identity =
            Identity::new(user.id).map_err(|e| VerifyError::Decode(e.to_string()))?;
        tracing::info!(
            "Token verified for user: {} ({})",
            identity,
            user.email.as_deref().unwrap_or("no email")
        );
        Ok(identity)
    }
}
