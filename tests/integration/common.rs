// Common utilities for integration tests

use digitalocean_client::prelude::*;
use mockito::{Matcher, Server, ServerGuard};

pub const TEST_TOKEN: &str = "test-token";

/// Configuration pointing at the mock server, with short retries and no practical rate limit
pub fn test_config(server: &ServerGuard) -> Config {
    Config::with_token(TEST_TOKEN)
        .with_base_url(server.url())
        .with_retry(RetryConfig::with_max_attempts_and_backoff(3, 1))
        .with_rate_limiter(RateLimiterConfig {
            max_requests: 10_000,
            period_seconds: 1,
            burst_size: 1_000,
        })
}

/// Starts a mock server and a client bound to it
pub async fn create_test_client() -> (ServerGuard, Client) {
    setup_logger();
    let server = Server::new_async().await;
    let client = Client::new(test_config(&server)).expect("client should build");
    (server, client)
}

/// Query matcher for the default paging parameters
pub fn default_paging() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), "1".into()),
        Matcher::UrlEncoded("per_page".into(), "100".into()),
    ])
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
