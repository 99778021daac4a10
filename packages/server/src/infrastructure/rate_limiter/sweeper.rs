//! Background sweep task for rate limiter state.

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use crate::domain::RateLimiter;

/// Spawn a task that calls [`RateLimiter::sweep`] every `period`.
///
/// The task runs until the returned handle is aborted or the runtime shuts
/// down. It does not depend on any request path.
pub fn spawn_sweeper(limiter: Arc<dyn RateLimiter>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = limiter.sweep();
            if removed > 0 {
                tracing::debug!(
                    "Rate limiter sweep removed {} idle identities ({} remaining)",
                    removed,
                    limiter.tracked_identities()
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use lintgate_shared::time::ManualClock;

    use super::*;
    use crate::{domain::Identity, infrastructure::rate_limiter::SlidingWindowRateLimiter};

    #[tokio::test]
    async fn test_sweeper_clears_expired_state() {
        // テスト項目: バックグラウンドの sweep が期限切れの identity を破棄する
        // given (前提条件):
        let clock = Arc::new(ManualClock::new(0));
        let limiter = Arc::new(SlidingWindowRateLimiter::with_clock(
            5,
            Duration::from_secs(60),
            clock.clone(),
        ));
        let alice = Identity::new("alice".to_string()).unwrap();
        assert!(limiter.allow(&alice));
        assert_eq!(limiter.tracked_identities(), 1);

        // when (操作): ウィンドウを過ぎた後、sweep が数回走るのを待つ
        clock.advance(61_000);
        let handle = spawn_sweeper(limiter.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        // then (期待する結果):
        assert_eq!(limiter.tracked_identities(), 0);
    }

    #[tokio::test]
    async fn test_sweeper_keeps_active_identities() {
        // テスト項目: ウィンドウ内の identity は sweep されない
        // given (前提条件):
        let clock = Arc::new(ManualClock::new(0));
        let limiter = Arc::new(SlidingWindowRateLimiter::with_clock(
            5,
            Duration::from_secs(60),
            clock.clone(),
        ));
        let alice = Identity::new("alice".to_string()).unwrap();
        limiter.allow(&alice);

        // when (操作):
        clock.advance(10_000);
        let handle = spawn_sweeper(limiter.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        // then (期待する結果):
        assert_eq!(limiter.tracked_identities(), 1);
    }
}
