/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::responses::RawResponse;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// DigitalOcean API client
///
/// Implements every service trait of [`crate::application::interfaces`].
/// Cloning is cheap and clones share the connection pool and the rate limiter,
/// so one client can be used from many tasks at once.
///
/// ```no_run
/// use digitalocean_client::prelude::*;
///
/// # async fn run() -> Result<(), AppError> {
/// let client = Client::from_env()?;
/// let account = client.get_account().await?;
/// println!("{}", account.email);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from an explicit configuration
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the configuration has no token or an invalid base URL
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client configured from the environment and `.env`
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client with a token and default settings
    pub fn with_token(token: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_token(token))
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying executor
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Runs any endpoint descriptor and deserializes its payload
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, AppError> {
        self.http_client.execute(endpoint).await
    }

    /// Runs any endpoint descriptor and returns the full response envelope
    ///
    /// Use it when paging links, `meta.total` or rate limit headers are needed.
    pub async fn execute_raw(&self, endpoint: Endpoint) -> Result<RawResponse, AppError> {
        self.http_client.execute_raw(endpoint).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config().rest_api.base_url)
            .finish()
    }
}
