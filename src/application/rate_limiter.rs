/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides client-side rate limiting using the `governor` crate
//! so that a single token stays below the DigitalOcean request allowance.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const FALLBACK_BURST: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// Rate limiter for controlling API request rates
///
/// Uses the `governor` crate to implement a token bucket: `max_requests`
/// cells are replenished evenly over `period_seconds`, with up to
/// `burst_size` requests allowed back to back.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// # Example
    ///
    /// ```
    /// use digitalocean_client::application::config::RateLimiterConfig;
    /// use digitalocean_client::application::rate_limiter::RateLimiter;
    ///
    /// let config = RateLimiterConfig {
    ///     max_requests: 250,
    ///     period_seconds: 60,
    ///     burst_size: 25,
    /// };
    ///
    /// let limiter = RateLimiter::new(&config);
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = u64::from(config.max_requests.max(1));
        let replenish = Duration::from_millis(
            (config.period_seconds.saturating_mul(1000) / max_requests).max(1),
        );

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(FALLBACK_BURST);

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(FALLBACK_BURST))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Checks if a request can be made immediately, consuming a cell when it can
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
