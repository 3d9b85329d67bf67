//! Client builder for constructing [`CeluzadorClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Resolving the endpoint URL (credentials host, or an explicit override)
//! - Configuring the underlying HTTP client (timeout, user agent)
//!
//! # Invariants
//! - `credentials` is required and must be provided before calling `build()`
//! - Without an override the endpoint is always `https://<api_host>/`

use std::time::Duration;

use celuzador_config::Credentials;
use celuzador_config::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
use tracing::debug;

use crate::client::CeluzadorClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CeluzadorClient`].
///
/// # Example
///
/// ```rust,ignore
/// let client = CeluzadorClient::builder()
///     .credentials(&credentials)
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// let value = client.lookup("51987654321").await?;
/// ```
pub struct CeluzadorClientBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for CeluzadorClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CeluzadorClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credentials sent with every request.
    pub fn credentials(mut self, credentials: &Credentials) -> Self {
        self.credentials = Some(credentials.clone());
        self
    }

    /// Post to `url` instead of `https://<api_host>/`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CeluzadorClient> {
        let credentials = self
            .credentials
            .ok_or(ClientError::MissingCredentials)?;

        let url = match self.base_url {
            Some(url) => url,
            None => credentials.endpoint_url(),
        };
        let url = url::Url::parse(&url)
            .map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        debug!(url = %url, timeout_secs = self.timeout.as_secs(), "Built lookup client");

        Ok(CeluzadorClient {
            http,
            url,
            credentials,
            timeout: self.timeout,
        })
    }
}
