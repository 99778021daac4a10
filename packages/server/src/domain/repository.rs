//! Connection registry interface.
//!
//! The registry is shared by every connection task. Implementations must make
//! each operation atomic with respect to the others; callers never get access
//! to the underlying map.

use super::{Connection, ConnectionId, Identity, Timestamp};

/// Registry of live connections
pub trait ConnectionRepository: Send + Sync {
    /// Register a connection under its id
    fn insert(&self, connection: Connection);

    /// Deregister a connection, returning it if it was present
    fn remove(&self, id: &ConnectionId) -> Option<Connection>;

    /// Update the last-activity timestamp. Returns `false` if the id is unknown.
    fn touch(&self, id: &ConnectionId, at: Timestamp) -> bool;

    /// Look up a connection
    fn get(&self, id: &ConnectionId) -> Option<Connection>;

    /// Number of registered connections
    fn count(&self) -> usize;

    /// Identities of all registered connections (one entry per connection)
    fn identities(&self) -> Vec<Identity>;
}
