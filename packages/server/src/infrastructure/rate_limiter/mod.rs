//! Rate limiter implementations.

mod sliding_window;
mod sweeper;

pub use sliding_window::SlidingWindowRateLimiter;
pub use sweeper::spawn_sweeper;
