/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rate limit headers returned with every API response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RateLimitInfo {
    /// Requests allowed per window (`ratelimit-limit`)
    pub limit: Option<u64>,
    /// Requests left in the current window (`ratelimit-remaining`)
    pub remaining: Option<u64>,
    /// Unix time at which the window resets (`ratelimit-reset`)
    pub reset: Option<u64>,
}

impl RateLimitInfo {
    /// Extracts the rate limit headers of a response
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_value(headers, "ratelimit-limit").and_then(|v| v.parse().ok()),
            remaining: header_value(headers, "ratelimit-remaining").and_then(|v| v.parse().ok()),
            reset: header_value(headers, "ratelimit-reset").and_then(|v| v.parse().ok()),
        }
    }
}

/// Identification of a request on the API side, useful when reporting problems
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RequestInfo {
    /// Request id assigned by the API (`x-request-id`)
    pub id: Option<String>,
    /// Server-side processing time (`x-runtime`)
    pub runtime: Option<String>,
}

impl RequestInfo {
    /// Extracts the request identification headers of a response
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            id: header_value(headers, "x-request-id"),
            runtime: header_value(headers, "x-runtime"),
        }
    }
}

/// Full response envelope, returned by the raw execution path
///
/// Unlike the typed operations, which unwrap a single field of the body, this
/// keeps the whole JSON document together with the response metadata.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Whole JSON body (an empty object when the API sent no content)
    pub body: Value,
    /// Rate limit headers
    pub ratelimit: RateLimitInfo,
    /// Request identification headers
    #[serde(rename = "requestinfo")]
    pub request_info: RequestInfo,
}

impl RawResponse {
    /// Returns the `links` object used by the API for pagination, if any
    pub fn links(&self) -> Option<&Value> {
        self.body.get("links")
    }

    /// Returns `meta.total`, the total number of items of a list endpoint
    pub fn total(&self) -> Option<u64> {
        self.body.get("meta")?.get("total")?.as_u64()
    }
}

/// Error body returned by the API for non-2xx responses
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    /// Machine readable error id, e.g. `not_found`
    #[serde(default)]
    pub id: Option<String>,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Longer description, preferred over `message` when present
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiErrorBody {
    /// Picks the most descriptive text of an error body, falling back to the raw text
    pub fn describe(raw: &str) -> String {
        let parsed: ApiErrorBody = serde_json::from_str(raw).unwrap_or_default();
        parsed
            .description
            .filter(|d| !d.is_empty())
            .or(parsed.message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
