//! UseCase: client connection and teardown
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::authenticate() / register()
//! - ConnectionSession の Drop による登録解除
//!
//! ### なぜこのテストが必要か
//! - 認証に失敗した接続がレジストリに一切登録されないことを保証する
//! - どの経路で切断しても登録解除がちょうど 1 回行われることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：トークン検証成功 → 登録 → 切断
//! - 異常系：トークンなし、空トークン、検証失敗、検証タイムアウト

use std::{sync::Arc, time::Duration};

use lintgate_shared::time::Clock;

use crate::domain::{
    Connection, ConnectionId, ConnectionRepository, Credential, Identity, IdentityVerifier,
    Timestamp, VerifyError,
};

use super::error::ConnectError;

/// Client connection use case
pub struct ConnectClientUseCase {
    verifier: Arc<dyn IdentityVerifier>,
    repository: Arc<dyn ConnectionRepository>,
    clock: Arc<dyn Clock>,
    verify_timeout: Duration,
}

impl ConnectClientUseCase {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        repository: Arc<dyn ConnectionRepository>,
        clock: Arc<dyn Clock>,
        verify_timeout: Duration,
    ) -> Self {
        Self {
            verifier,
            repository,
            clock,
            verify_timeout,
        }
    }

    /// Resolve the credential presented at connect time to an identity.
    ///
    /// Does not touch the registry; a rejected client leaves no trace.
    ///
    /// # Errors
    ///
    /// * `ConnectError::MissingCredential` - no credential, or an empty one
    /// * `ConnectError::Unauthorized` - verification failed or timed out
    pub async fn authenticate(&self, credential: Option<String>) -> Result<Identity, ConnectError> {
        let credential = credential
            .and_then(|value| Credential::new(value).ok())
            .ok_or(ConnectError::MissingCredential)?;

        match tokio::time::timeout(self.verify_timeout, self.verifier.verify(&credential)).await {
            Ok(Ok(identity)) => Ok(identity),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(VerifyError::Timeout.into()),
        }
    }

    /// Register a connection for an authenticated identity.
    ///
    /// The connection stays registered for as long as the returned session
    /// is alive.
    pub fn register(&self, identity: Identity) -> ConnectionSession {
        let connection = Connection::new(
            ConnectionId::generate(),
            identity.clone(),
            Timestamp::new(self.clock.now_millis()),
        );
        let id = connection.id;
        self.repository.insert(connection);

        tracing::info!(
            "Client '{}' connected as {} ({} active)",
            identity,
            id,
            self.repository.count()
        );

        ConnectionSession {
            id,
            identity,
            repository: self.repository.clone(),
            clock: self.clock.clone(),
        }
    }
}

/// Registration of one live connection.
///
/// Owned by the connection's task. Dropping it deregisters the connection,
/// whichever way the task ends.
pub struct ConnectionSession {
    id: ConnectionId,
    identity: Identity,
    repository: Arc<dyn ConnectionRepository>,
    clock: Arc<dyn Clock>,
}

impl ConnectionSession {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Record activity on the connection
    pub fn touch(&self) {
        let now = Timestamp::new(self.clock.now_millis());
        if !self.repository.touch(&self.id, now) {
            tracing::warn!("Connection {} missing from registry on touch", self.id);
        }
    }
}

impl Drop for ConnectionSession {
    fn drop(&mut self) {
        if self.repository.remove(&self.id).is_some() {
            tracing::info!(
                "Client '{}' disconnected ({} active)",
                self.identity,
                self.repository.count()
            );
        }
    }
}
