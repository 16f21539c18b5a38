// Integration tests for retries, envelope handling and raw responses

use crate::common;
use digitalocean_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_retries_server_errors_then_succeeds() {
    let (mut server, client) = common::create_test_client().await;
    let failing = server
        .mock("GET", "/droplets/42")
        .with_status(500)
        .with_body(r#"{"id":"server_error","message":"Server was unable to give you a response."}"#)
        .expect(2)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/droplets/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"droplet": {"id": 42, "name": "web-1", "status": "active"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let droplet = client.get_droplet(42).await.unwrap();
    assert_eq!(droplet.id, 42);
    assert_eq!(droplet.status, DropletStatus::Active);
    failing.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_retries_rate_limited_requests() {
    let (mut server, client) = common::create_test_client().await;
    let limited = server
        .mock("GET", "/account")
        .with_status(429)
        .with_body(r#"{"id":"too_many_requests","message":"API Rate limit exceeded."}"#)
        .expect(1)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/account")
        .with_status(200)
        .with_body(json!({"account": {"email": "sammy@digitalocean.com"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let account = client.get_account().await.unwrap();
    assert_eq!(account.email, "sammy@digitalocean.com");
    limited.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_exhausted_retries_surface_api_description() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets/42")
        .with_status(503)
        .with_body(r#"{"id":"unavailable","message":"short","description":"Service is down for maintenance"}"#)
        .expect(3)
        .create_async()
        .await;

    let error = client.get_droplet(42).await.unwrap_err();
    match error {
        AppError::Api {
            status, message, ..
        } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(message, "Service is down for maintenance");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_envelope_field() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets/42")
        .with_status(200)
        .with_header("x-request-id", "req-missing")
        .with_body(r#"{"something_else": {}}"#)
        .expect(1)
        .create_async()
        .await;

    let error = client.get_droplet(42).await.unwrap_err();
    match error {
        AppError::MissingField { field, request } => {
            assert_eq!(field, "droplet");
            assert_eq!(request.id.as_deref(), Some("req-missing"));
        }
        other => panic!("expected a missing field error, got {other:?}"),
    }
    // a malformed envelope is not retried
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let request = CreateDomainRequest {
        name: String::new(),
        ip_address: "1.2.3.4".to_string(),
    };
    let error = client.create_domain(&request).await.unwrap_err();
    match &error {
        AppError::Validation {
            callee, details, ..
        } => {
            assert_eq!(callee, "create_domain");
            assert_eq!(details, &vec!["name: name is required".to_string()]);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_path_parameter_sends_nothing() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client.get_domain("").await.unwrap_err();
    match &error {
        AppError::Validation { callee, details, .. } => {
            assert_eq!(callee, "get_domain");
            assert_eq!(
                details,
                &vec!["path parameter `domain_name` must not be empty".to_string()]
            );
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    mock.assert_async().await;
}

fn expect_validation(error: AppError, expected_callee: &str, expected: &str) {
    match error {
        AppError::Validation { callee, details, .. } => {
            assert_eq!(callee, expected_callee);
            assert_eq!(details, vec![expected.to_string()]);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_parent_segment_parameters_send_nothing() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client
        .destroy_ssh_key(&SshKeyRef::Fingerprint("..".to_string()))
        .await
        .unwrap_err();
    expect_validation(
        error,
        "destroy_ssh_key",
        "path parameter `key_id` must not be a relative segment",
    );

    let error = client.destroy_domain_record("..", 5).await.unwrap_err();
    expect_validation(
        error,
        "destroy_domain_record",
        "path parameter `domain_name` must not be a relative segment",
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_and_fragment_in_parameter_send_nothing() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client
        .get_domain("example.com?name=x#frag")
        .await
        .unwrap_err();
    expect_validation(
        error,
        "get_domain",
        "path parameter `domain_name` must not contain '/', '?', '#' or '%'",
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_execute_raw_returns_envelope_and_headers() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets")
        .match_query(common::default_paging())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("ratelimit-limit", "5000")
        .with_header("ratelimit-remaining", "4999")
        .with_header("ratelimit-reset", "1444931833")
        .with_header("x-request-id", "req-raw")
        .with_header("x-runtime", "0.01")
        .with_body(
            json!({
                "droplets": [{"id": 1}],
                "links": {},
                "meta": {"total": 1}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let raw = client
        .execute_raw(endpoints::get_droplets(None))
        .await
        .unwrap();
    assert_eq!(raw.status, 200);
    assert_eq!(raw.total(), Some(1));
    assert_eq!(raw.ratelimit.limit, Some(5000));
    assert_eq!(raw.ratelimit.remaining, Some(4999));
    assert_eq!(raw.ratelimit.reset, Some(1444931833));
    assert_eq!(raw.request_info.id.as_deref(), Some("req-raw"));
    assert_eq!(raw.request_info.runtime.as_deref(), Some("0.01"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_execute_raw_empty_body_is_empty_object() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("DELETE", "/droplets/42")
        .with_status(204)
        .create_async()
        .await;

    let raw = client
        .execute_raw(endpoints::destroy_droplet(42))
        .await
        .unwrap();
    assert_eq!(raw.status, 204);
    assert_eq!(raw.body, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_after_retries() {
    setup_logger();
    // nothing listens on port 1
    let config = Config::with_token(common::TEST_TOKEN)
        .with_base_url("http://127.0.0.1:1")
        .with_retry(RetryConfig::with_max_attempts_and_backoff(2, 1));
    let client = Client::new(config).unwrap();

    let error = client.get_account().await.unwrap_err();
    assert!(matches!(error, AppError::Network(_)));
}
