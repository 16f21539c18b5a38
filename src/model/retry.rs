/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BACKOFF_STEP_MS, DEFAULT_MAX_ATTEMPTS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request retry behavior
///
/// Retries use a linear backoff: after the failed attempt `n` the client
/// waits `n * backoff_step_ms` milliseconds before attempt `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (None = use default 5)
    pub max_attempts: Option<u32>,
    /// Linear backoff step in milliseconds (None = use default 1000)
    pub backoff_step_ms: Option<u64>,
}

impl RetryConfig {
    /// Creates a new retry configuration from the environment or the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration with the compiled defaults, ignoring the environment
    #[must_use]
    pub fn standard() -> Self {
        Self {
            max_attempts: None,
            backoff_step_ms: None,
        }
    }

    /// Creates a retry configuration that never retries
    #[must_use]
    pub fn no_retry() -> Self {
        Self::with_max_attempts(1)
    }

    /// Creates a new retry configuration with a maximum number of attempts
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff_step_ms: None,
        }
    }

    /// Creates a new retry configuration with a custom backoff step
    #[must_use]
    pub fn with_backoff_step(backoff_step_ms: u64) -> Self {
        Self {
            max_attempts: None,
            backoff_step_ms: Some(backoff_step_ms),
        }
    }

    /// Creates a new retry configuration with both max attempts and backoff step
    #[must_use]
    pub fn with_max_attempts_and_backoff(max_attempts: u32, backoff_step_ms: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff_step_ms: Some(backoff_step_ms),
        }
    }

    /// Gets the maximum number of attempts (default: 5, never less than 1)
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        match self.max_attempts {
            Some(0) | None => DEFAULT_MAX_ATTEMPTS,
            Some(n) => n,
        }
    }

    /// Gets the backoff step in milliseconds (default: 1000)
    #[must_use]
    pub fn backoff_step_ms(&self) -> u64 {
        self.backoff_step_ms.unwrap_or(DEFAULT_BACKOFF_STEP_MS)
    }

    /// Delay to wait after the failed attempt number `attempt` (1-based)
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_step_ms().saturating_mul(u64::from(attempt)))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_attempts: Option<u32> = get_env_or_none("DO_MAX_RETRIES");
        let backoff_step_ms: Option<u64> = get_env_or_none("DO_RETRY_BACKOFF_MS");

        Self {
            max_attempts,
            backoff_step_ms,
        }
    }
}
