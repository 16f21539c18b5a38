use digitalocean_client::model::retry::RetryConfig;
use std::time::Duration;

#[test]
fn test_retry_config_standard() {
    let config = RetryConfig::standard();
    assert_eq!(config.max_attempts(), 5);
    assert_eq!(config.backoff_step_ms(), 1000);
}

#[test]
fn test_retry_config_no_retry() {
    let config = RetryConfig::no_retry();
    assert_eq!(config.max_attempts(), 1);
}

#[test]
fn test_retry_config_with_max_attempts() {
    let config = RetryConfig::with_max_attempts(3);
    assert_eq!(config.max_attempts(), 3);
    assert_eq!(config.backoff_step_ms(), 1000); // default
}

#[test]
fn test_retry_config_with_backoff_step() {
    let config = RetryConfig::with_backoff_step(250);
    assert_eq!(config.max_attempts(), 5); // default
    assert_eq!(config.backoff_step_ms(), 250);
}

#[test]
fn test_retry_config_zero_attempts_uses_default() {
    let config = RetryConfig {
        max_attempts: Some(0),
        backoff_step_ms: None,
    };
    assert_eq!(config.max_attempts(), 5);
}

#[test]
fn test_retry_config_linear_backoff() {
    let config = RetryConfig::with_max_attempts_and_backoff(5, 1000);
    assert_eq!(config.delay_for(1), Duration::from_millis(1000));
    assert_eq!(config.delay_for(2), Duration::from_millis(2000));
    assert_eq!(config.delay_for(4), Duration::from_millis(4000));
}

#[test]
fn test_retry_config_serialization() {
    let config = RetryConfig::with_max_attempts_and_backoff(3, 10);
    let json = serde_json::to_string(&config).unwrap();
    let back: RetryConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
