/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # DigitalOcean Client
//!
//! A typed client for the DigitalOcean v2 REST API covering droplets, images,
//! domains, SSH keys, floating IPs, regions, sizes and actions.
//!
//! Every operation is described by an [`model::endpoint::Endpoint`]: the HTTP
//! method, a path template with `:name` placeholders, the path parameters, an
//! optional query, an optional JSON body and the name of the field that carries
//! the payload in the response envelope. A single executor
//! ([`model::http::HttpClient`]) validates the descriptor, builds the URL,
//! retries transient failures with linear backoff and unwraps the envelope.
//!
//! ## Example
//!
//! ```ignore
//! use digitalocean_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let droplets = client.get_droplets(None).await?;
//!     for droplet in droplets {
//!         info!("{} ({})", droplet.name, droplet.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`application::config::Config::new`] reads a `.env` file and the process
//! environment. The most relevant variables are:
//!
//! * `DO_API_TOKEN` - personal access token sent as a bearer token
//! * `DO_API_BASE_URL` - API root (default `https://api.digitalocean.com/v2`)
//! * `DO_PAGE_SIZE` - default `per_page` for list operations (default 100)
//! * `DO_MAX_RETRIES` - maximum number of attempts per request (default 5)
//! * `DO_RETRY_BACKOFF_MS` - linear backoff step in milliseconds (default 1000)

/// Application layer: client facade, configuration, services and rate limiting
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Endpoint descriptors, request/response models and the HTTP executor
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Typed models for the objects returned by the API
pub mod presentation;

/// Environment, logging and path helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
