//! Main Celuzador API client.

pub mod builder;

use std::time::Duration;

use celuzador_config::Credentials;
use serde_json::Value;

use crate::endpoints;
use crate::error::Result;

pub use builder::CeluzadorClientBuilder;

/// Celuzador lookup client.
///
/// Holds a configured HTTP client, the resolved endpoint URL, and the
/// credentials sent with every request.
#[derive(Debug)]
pub struct CeluzadorClient {
    http: reqwest::Client,
    url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl CeluzadorClient {
    /// Create a new client builder.
    pub fn builder() -> CeluzadorClientBuilder {
        CeluzadorClientBuilder::new()
    }

    /// The URL lookups are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Look up a phone number and return the decoded JSON response.
    pub async fn lookup(&self, phone_number: &str) -> Result<Value> {
        endpoints::lookup(
            &self.http,
            &self.url,
            &self.credentials,
            phone_number,
            self.timeout,
        )
        .await
    }
}
