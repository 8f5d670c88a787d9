//! Request pacing
//!
//! Uses the governor crate for token bucket rate limiting. The bucket
//! holds a single permit replenished once per interval, which spaces page
//! requests without sleeping after the final one.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const ONE: NonZeroU32 = NonZeroU32::MIN;

/// Configuration for request pacing
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Minimum interval between consecutive requests
    pub min_interval: Duration,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            // ~85 requests/minute, under the documented 100/minute limit
            min_interval: Duration::from_millis(700),
        }
    }
}

impl RateLimiterConfig {
    /// Create a pacing config with the given minimum request interval
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Self {
        let quota = Quota::with_period(config.min_interval)
            .unwrap_or_else(|| Quota::per_second(ONE))
            .allow_burst(ONE);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request can be made
    ///
    /// The bucket starts full, so the first call returns immediately.
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Check if a request can be made immediately
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}
