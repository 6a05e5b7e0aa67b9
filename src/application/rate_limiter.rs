/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request throttling
//!
//! Every dispatch waits on a `governor` token bucket before the request is sent. This
//! only spaces requests out; it never resends one.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by all requests of one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a rate limiter that replenishes `max_requests` cells every
    /// `period_seconds`, holding at most `burst_size` cells
    ///
    /// Zero values fall back to one request per period and a burst of one.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = period / max_requests;

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket has a cell for the next request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a cell if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn burst_is_available_immediately() {
        let limiter = RateLimiter::new(&RateLimiterConfig {
            max_requests: 10,
            period_seconds: 1,
            burst_size: 5,
        });

        for _ in 0..5 {
            assert!(limiter.check());
        }
        assert!(!limiter.check());
    }

    #[tokio::test]
    async fn wait_blocks_once_burst_is_spent() {
        let limiter = RateLimiter::new(&RateLimiterConfig {
            max_requests: 20,
            period_seconds: 1,
            burst_size: 1,
        });

        limiter.wait().await;
        let start = std::time::Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn zero_values_do_not_panic() {
        let limiter = RateLimiter::new(&RateLimiterConfig {
            max_requests: 0,
            period_seconds: 0,
            burst_size: 0,
        });
        assert!(limiter.check());
    }
}
