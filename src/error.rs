/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every operation of the client

use crate::model::responses::RequestInfo;
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the DigitalOcean client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure (connection refused, timeout, TLS...) that persisted
    /// through every retry attempt
    Network(reqwest::Error),
    /// A request body could not be serialized or a response payload could
    /// not be deserialized into the expected model
    Json(serde_json::Error),
    /// Caller-supplied parameters did not satisfy the endpoint schema.
    /// No request was sent.
    Validation {
        /// Name of the operation that built the request
        callee: String,
        /// HTTP method of the rejected request
        method: String,
        /// Path with every known parameter substituted
        path: String,
        /// One entry per violated constraint
        details: Vec<String>,
    },
    /// The API answered with a status outside 2xx
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// `description` or `message` from the error body
        message: String,
        /// Request identification headers
        request: RequestInfo,
    },
    /// The response body did not carry the field the endpoint unwraps
    MissingField {
        /// Name of the expected top-level field
        field: String,
        /// Request identification headers
        request: RequestInfo,
    },
    /// Invalid configuration or argument detected before sending
    InvalidInput(String),
}

impl AppError {
    /// HTTP status of the failed call, when the API answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true when the API reported that the resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Validation {
                callee,
                method,
                path,
                details,
            } => {
                write!(
                    f,
                    "validation error when calling \"{callee}\"\n[{method}] /{path}"
                )?;
                for detail in details {
                    write!(f, "\n- {detail}")?;
                }
                Ok(())
            }
            AppError::Api {
                status,
                message,
                request,
            } => {
                write!(f, "api error ({status}): {message}")?;
                if let Some(id) = &request.id {
                    write!(f, " [request id: {id}]")?;
                }
                Ok(())
            }
            AppError::MissingField { field, request } => {
                write!(f, "response was missing required field ({field})")?;
                if let Some(id) = &request.id {
                    write!(f, " [request id: {id}]")?;
                }
                Ok(())
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
