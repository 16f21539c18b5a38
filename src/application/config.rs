use crate::constants::{
    DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_first_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the DigitalOcean API
pub struct Credentials {
    /// Personal access token, sent as `Authorization: Bearer <token>`.
    /// Never serialized, so it does not leak through `Debug` or `Display`.
    #[serde(skip_serializing, default)]
    pub token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the DigitalOcean API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry behavior for transient failures
    pub retry: RetryConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Default number of items per page merged into list requests
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the DigitalOcean REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the `.env` file and the process environment
    ///
    /// The token is read from `DO_API_TOKEN`, falling back to
    /// `DIGITALOCEAN_TOKEN` and `DIGITALOCEAN_ACCESS_TOKEN`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_first_env(&["DO_API_TOKEN", "DIGITALOCEAN_TOKEN", "DIGITALOCEAN_ACCESS_TOKEN"])
            .unwrap_or_default();
        if token.is_empty() {
            error!("DO_API_TOKEN not found in environment variables or .env file");
        }

        let base_url = get_env_or_default("DO_API_BASE_URL", DEFAULT_API_URL.to_string());

        Config {
            credentials: Credentials { token },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("DO_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            retry: RetryConfig::default(),
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "DO_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "DO_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "DO_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            page_size: match get_env_or_default("DO_PAGE_SIZE", DEFAULT_PAGE_SIZE) {
                0 => DEFAULT_PAGE_SIZE,
                size => size,
            },
        }
    }

    /// Creates a configuration with the given token and the compiled defaults
    ///
    /// The environment is not consulted.
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                token: token.into(),
            },
            rest_api: RestApiConfig::default(),
            retry: RetryConfig::standard(),
            rate_limiter: RateLimiterConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default page size (a page size of 0 keeps the current value)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Set the retry behavior
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the rate limiter
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Returns true when a token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.credentials.token.trim().is_empty()
    }
}
