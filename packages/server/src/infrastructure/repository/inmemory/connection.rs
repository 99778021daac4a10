//! In-memory connection registry.
//!
//! A `HashMap` behind a `RwLock`: status queries take the read lock, every
//! membership change takes the write lock. The lock is never held across an
//! `.await`, so a blocking lock is used; that also lets the connection guard
//! deregister synchronously from `Drop`.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::domain::{Connection, ConnectionId, ConnectionRepository, Identity, Timestamp};

/// In-memory connection registry
#[derive(Default)]
pub struct InMemoryConnectionRepository {
    connections: RwLock<HashMap<ConnectionId, Connection>>,
}

impl InMemoryConnectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the map half-updated, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ConnectionId, Connection>> {
        self.connections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ConnectionId, Connection>> {
        self.connections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConnectionRepository for InMemoryConnectionRepository {
    fn insert(&self, connection: Connection) {
        let id = connection.id;
        let identity = connection.identity.clone();
        let previous = self.write().insert(id, connection);
        if previous.is_some() {
            tracing::warn!("Connection {} was already registered, replaced", id);
        }
        tracing::debug!("Connection {} registered for '{}'", id, identity);
    }

    fn remove(&self, id: &ConnectionId) -> Option<Connection> {
        let removed = self.write().remove(id);
        if removed.is_some() {
            tracing::debug!("Connection {} deregistered", id);
        }
        removed
    }

    fn touch(&self, id: &ConnectionId, at: Timestamp) -> bool {
        match self.write().get_mut(id) {
            Some(connection) => {
                connection.last_activity = at;
                true
            }
            None => false,
        }
    }

    fn get(&self, id: &ConnectionId) -> Option<Connection> {
        self.read().get(id).cloned()
    }

    fn count(&self) -> usize {
        self.read().len()
    }

    fn identities(&self) -> Vec<Identity> {
        self.read()
            .values()
            .map(|connection| connection.identity.clone())
            .collect()
    }
}
