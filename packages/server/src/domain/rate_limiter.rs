//! Rate limiter interface.

use super::Identity;

/// Per-identity request admission
pub trait RateLimiter: Send + Sync {
    /// Record a request for `identity` if it is within quota.
    ///
    /// Returns `true` when the request is accepted. A rejected request is not
    /// recorded and does not extend the identity's window.
    fn allow(&self, identity: &Identity) -> bool;

    /// Drop identities whose recorded requests have all left the window.
    ///
    /// Returns the number of identities removed.
    fn sweep(&self) -> usize;

    /// Number of identities currently holding state
    fn tracked_identities(&self) -> usize;
}
