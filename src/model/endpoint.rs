/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Endpoint descriptors
//!
//! An [`Endpoint`] is everything the executor needs to perform one API call:
//! the operation name, the HTTP method, a path template, the path parameters,
//! an optional query, an optional JSON body and the name of the response field
//! that carries the payload.
//!
//! Descriptors are built with a small builder and validated as a whole before
//! anything is sent. Body validation runs when the body is attached, but its
//! errors are only reported by [`Endpoint::validate`], together with any path
//! parameter problems, so that a caller sees every violation at once.

use crate::error::AppError;
use crate::model::query::{ListQuery, merge_paging};
use crate::utils::path::{path_placeholders, resolve_path};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Description of a single API call
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Public name of the operation that built the descriptor
    pub callee: &'static str,
    /// HTTP method (GET, POST, PUT or DELETE)
    pub method: Method,
    /// Path template relative to the API root, with `:name` placeholders
    pub path: &'static str,
    /// Values for the placeholders of `path`
    pub params: BTreeMap<String, String>,
    /// Query parameters; `None` for endpoints that do not take a query
    pub query: Option<BTreeMap<String, String>>,
    /// JSON body
    pub body: Option<Value>,
    /// Top-level response field holding the payload; `None` returns the whole body
    pub required: Option<&'static str>,
    body_errors: Vec<String>,
}

impl Endpoint {
    /// Creates a descriptor without parameters, query or body
    pub fn new(callee: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            callee,
            method,
            path,
            params: BTreeMap::new(),
            query: None,
            body: None,
            required: None,
            body_errors: Vec::new(),
        }
    }

    /// GET descriptor
    pub fn get(callee: &'static str, path: &'static str) -> Self {
        Self::new(callee, Method::GET, path)
    }

    /// POST descriptor
    pub fn post(callee: &'static str, path: &'static str) -> Self {
        Self::new(callee, Method::POST, path)
    }

    /// PUT descriptor
    pub fn put(callee: &'static str, path: &'static str) -> Self {
        Self::new(callee, Method::PUT, path)
    }

    /// DELETE descriptor
    pub fn delete(callee: &'static str, path: &'static str) -> Self {
        Self::new(callee, Method::DELETE, path)
    }

    /// Sets the value of a path placeholder
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    /// Marks the endpoint as a list endpoint and copies the caller's query
    ///
    /// Paging defaults are merged later by the executor, so an absent query
    /// still yields `page` and `per_page` parameters.
    pub fn paged(mut self, query: Option<&ListQuery>) -> Self {
        let mut params = self.query.take().unwrap_or_default();
        if let Some(query) = query {
            params.extend(query.to_params());
        }
        self.query = Some(params);
        self
    }

    /// Adds a query parameter unless the caller already supplied one with the same name
    pub fn default_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
        self
    }

    /// Attaches a JSON body, recording its validation errors for [`Endpoint::validate`]
    pub fn body<B: Serialize + Validate>(mut self, body: &B) -> Self {
        if let Err(errors) = body.validate() {
            self.body_errors.extend(describe_validation_errors(&errors));
        }
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.body_errors.push(format!("body could not be serialized: {e}")),
        }
        self
    }

    /// Sets the response field to unwrap
    pub fn required(mut self, field: &'static str) -> Self {
        self.required = Some(field);
        self
    }

    /// Path with every known placeholder substituted
    pub fn resolved_path(&self) -> String {
        resolve_path(self.path, &self.params)
    }

    /// Resolved path split into segments, each substituted value kept whole
    ///
    /// Placeholders are resolved segment by segment, so a value is never
    /// split or joined with its neighbours. Encoding is left to the caller.
    pub fn path_segments(&self) -> Vec<String> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| resolve_path(segment, &self.params))
            .collect()
    }

    /// Query with paging defaults merged in, or `None` for endpoints without a query
    pub fn query_with_paging(&self, page_size: u32) -> Option<BTreeMap<String, String>> {
        self.query.clone().map(|mut query| {
            merge_paging(&mut query, page_size);
            query
        })
    }

    /// Checks the descriptor against its schema, reporting every violation at once
    ///
    /// # Errors
    /// [`AppError::Validation`] when the method is unsupported, a placeholder
    /// has no usable value, or the body failed validation. A usable value is
    /// non-empty, is not `.` or `..`, and contains none of `/ ? # %`.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut details = Vec::new();

        if !matches!(
            self.method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            details.push(format!("method {} is not supported", self.method));
        }

        for name in path_placeholders(self.path) {
            match self.params.get(name) {
                None => details.push(format!("path parameter `{name}` is required")),
                Some(value) if value.trim().is_empty() => {
                    details.push(format!("path parameter `{name}` must not be empty"))
                }
                Some(value) if value == "." || value == ".." => details.push(format!(
                    "path parameter `{name}` must not be a relative segment"
                )),
                Some(value) if value.contains(['/', '?', '#', '%']) => details.push(format!(
                    "path parameter `{name}` must not contain '/', '?', '#' or '%'"
                )),
                Some(_) => {}
            }
        }

        details.extend(self.body_errors.iter().cloned());

        if details.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation {
                callee: self.callee.to_string(),
                method: self.method.to_string(),
                path: self.resolved_path(),
                details,
            })
        }
    }
}

/// Flattens `validator` errors into one readable line per violated constraint
pub fn describe_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let text = match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                };
                // schema level errors are keyed "__all__"
                if *field == "__all__" {
                    text
                } else {
                    format!("{field}: {text}")
                }
            })
        })
        .collect();
    details.sort();
    details
}
