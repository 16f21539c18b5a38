/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::responses::{ApiErrorBody, RateLimitInfo, RawResponse, RequestInfo};
use crate::model::retry::RetryConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Status, headers and body text of a response, read once the retry loop is done
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text (empty for 204 responses)
    pub text: String,
}

/// Executor shared by every operation of the client
///
/// Holds the configuration, the underlying `reqwest` client and the
/// client-side rate limiter. All of them are read-only after construction.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Creates a new executor
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the token is missing or the base URL is not a valid URL
    /// * `AppError::Network` - if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        if !config.has_token() {
            return Err(AppError::InvalidInput(
                "an API token is required (set DO_API_TOKEN)".to_string(),
            ));
        }
        Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!(
                "invalid base url {}: {e}",
                config.rest_api.base_url
            ))
        })?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Configuration the executor was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the full URL of an endpoint: base URL, resolved path and query with paging defaults
    ///
    /// Every path segment is percent-encoded on its own, so a parameter value
    /// stays inside the segment it was substituted into.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the base URL cannot carry a path
    pub fn build_url(&self, endpoint: &Endpoint) -> Result<Url, AppError> {
        let base = &self.config.rest_api.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| AppError::InvalidInput(format!("invalid base url {base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| AppError::InvalidInput(format!("base url {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(endpoint.path_segments());

        if let Some(query) = endpoint.query_with_paging(self.config.page_size) {
            if !query.is_empty() {
                url.query_pairs_mut().extend_pairs(query.iter());
            }
        }
        Ok(url)
    }

    /// Executes an endpoint and deserializes the unwrapped payload
    ///
    /// The payload is the `required` field of the response body, or the whole
    /// body when the endpoint names no field. An empty body deserializes from
    /// JSON `null`, so `()` is the natural result type of DELETE endpoints.
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, AppError> {
        let response = self.send(&endpoint).await?;
        let request = RequestInfo::from_headers(&response.headers);
        let body = parse_body(&response.text)?;
        let payload = unwrap_payload(endpoint.required, body, &request)?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Executes an endpoint and returns the whole envelope with rate limit and request headers
    pub async fn execute_raw(&self, endpoint: Endpoint) -> Result<RawResponse, AppError> {
        let response = self.send(&endpoint).await?;
        let request = RequestInfo::from_headers(&response.headers);
        let body = match parse_body(&response.text)? {
            Value::Null => Value::Object(Map::new()),
            body => body,
        };
        if let Some(field) = endpoint.required {
            check_required(field, &body, &request)?;
        }
        Ok(RawResponse {
            status: response.status.as_u16(),
            body,
            ratelimit: RateLimitInfo::from_headers(&response.headers),
            request_info: request,
        })
    }

    /// Validates, sends with retries and rejects non-2xx responses
    async fn send(&self, endpoint: &Endpoint) -> Result<HttpResponse, AppError> {
        endpoint.validate()?;
        let url = self.build_url(endpoint)?;

        let auth_header_value = format!("Bearer {}", self.config.credentials.token);
        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Accept", "application/json"),
        ];

        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            endpoint.method.clone(),
            &url,
            headers,
            endpoint.body.as_ref(),
            &self.config.retry,
        )
        .await?;

        if !response.status.is_success() {
            let request = RequestInfo::from_headers(&response.headers);
            let message = if response.text.trim().is_empty() {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                ApiErrorBody::describe(&response.text)
            };
            error!(
                "{} [{}] {} failed with status {}: {}",
                endpoint.callee, endpoint.method, url, response.status, message
            );
            return Err(AppError::Api {
                status: response.status,
                message,
                request,
            });
        }

        Ok(response)
    }
}

/// Returns true for responses worth another attempt: server errors and rate limiting
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Makes an HTTP request with client-side rate limiting and linear-backoff retries
///
/// Transport failures, 5xx and 429 responses are retried until
/// `retry_config.max_attempts()` attempts have been made; the failed attempt
/// `n` is followed by a pause of `n * backoff_step`. When the attempts are
/// exhausted a transport failure is returned as `AppError::Network` while a
/// failing status is returned as a normal response so that the caller can
/// report the API's own error description.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method (GET, POST, PUT, DELETE)
/// * `url` - Full URL to request, query included
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional JSON body
/// * `retry_config` - Maximum attempts and backoff step
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &Url,
    headers: Vec<(&str, &str)>,
    body: Option<&Value>,
    retry_config: &RetryConfig,
) -> Result<HttpResponse, AppError> {
    let max_attempts = retry_config.max_attempts();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        rate_limiter.wait().await;

        if attempt == 1 {
            debug!("[doapi] {} \"{}\"", method, url);
        } else {
            warn!("[doapi attempt {}] {} \"{}\"", attempt, method, url);
        }

        let mut request = client.request(method.clone(), url.clone());
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Response status: {}", status);

                if is_retryable_status(status) && attempt < max_attempts {
                    let delay = retry_config.delay_for(attempt);
                    warn!(
                        "Request failed with status {} (attempt {}/{}). Waiting {:?} before retry...",
                        status, attempt, max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }

                let headers = response.headers().clone();
                let text = response.text().await?;
                return Ok(HttpResponse {
                    status,
                    headers,
                    text,
                });
            }
            Err(e) => {
                if attempt < max_attempts {
                    let delay = retry_config.delay_for(attempt);
                    warn!(
                        "Request failed: {} (attempt {}/{}). Waiting {:?} before retry...",
                        e, attempt, max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                error!("Request failed after {} attempts: {}", attempt, e);
                return Err(AppError::Network(e));
            }
        }
    }
}

fn parse_body(text: &str) -> Result<Value, AppError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

fn check_required(field: &str, body: &Value, request: &RequestInfo) -> Result<(), AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::MissingField {
            field: field.to_string(),
            request: request.clone(),
        }),
        Some(_) => Ok(()),
    }
}

/// Takes the `required` field out of the body, or returns the body itself
pub fn unwrap_payload(
    required: Option<&str>,
    mut body: Value,
    request: &RequestInfo,
) -> Result<Value, AppError> {
    let Some(field) = required else {
        return Ok(body);
    };
    check_required(field, &body, request)?;
    Ok(body
        .as_object_mut()
        .and_then(|map| map.remove(field))
        .unwrap_or(Value::Null))
}
