//! Exact sliding-window rate limiter.
//!
//! Each identity keeps the timestamps of its accepted requests, oldest first.
//! On every check the entries at or before `now - window` are dropped and the
//! request is accepted only while fewer than `limit` entries remain. This
//! never admits more than `limit` requests in any trailing window, unlike a
//! fixed-bucket counter.
//!
//! Prune, check and append happen under one mutex, which the background sweep
//! also takes.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use lintgate_shared::time::{Clock, SystemClock};

use crate::domain::{Identity, RateLimiter};

type Windows = HashMap<Identity, VecDeque<i64>>;

/// Sliding-window rate limiter keyed by identity
pub struct SlidingWindowRateLimiter {
    limit: usize,
    window_millis: i64,
    clock: Arc<dyn Clock>,
    windows: Mutex<Windows>,
}

impl SlidingWindowRateLimiter {
    /// Create a limiter admitting `limit` requests per `window`, using the system clock
    pub fn new(limit: usize, window: Duration) -> Self {
        Self::with_clock(limit, window, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: usize, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            window_millis: i64::try_from(window.as_millis()).unwrap_or(i64::MAX),
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Windows> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn window_start(&self, now: i64) -> i64 {
        now.saturating_sub(self.window_millis)
    }
}

/// Drop timestamps at or before `window_start`
fn prune(timestamps: &mut VecDeque<i64>, window_start: i64) {
    while timestamps
        .front()
        .is_some_and(|&timestamp| timestamp <= window_start)
    {
        timestamps.pop_front();
    }
}

impl RateLimiter for SlidingWindowRateLimiter {
    fn allow(&self, identity: &Identity) -> bool {
        let now = self.clock.now_millis();
        let window_start = self.window_start(now);

        let mut windows = self.lock();
        let timestamps = windows.entry(identity.clone()).or_default();
        prune(timestamps, window_start);

        if timestamps.len() >= self.limit {
            tracing::debug!(
                "Rate limit reached for '{}' ({}/{})",
                identity,
                timestamps.len(),
                self.limit
            );
            return false;
        }

        timestamps.push_back(now);
        true
    }

    fn sweep(&self) -> usize {
        let window_start = self.window_start(self.clock.now_millis());

        let mut windows = self.lock();
        let before = windows.len();
        windows.retain(|_, timestamps| {
            prune(timestamps, window_start);
            !timestamps.is_empty()
        });
        before - windows.len()
    }

    fn tracked_identities(&self) -> usize {
        self.lock().len()
    }
}
