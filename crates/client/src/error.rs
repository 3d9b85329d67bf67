//! Error types for the Celuzador client.

use std::time::Duration;
use thiserror::Error;

use crate::models::ResponseBody;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during a lookup.
///
/// Every variant is terminal for the request that produced it; the client
/// never retries.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The API rejected the credentials (HTTP 401 or 403).
    #[error("Authentication failed ({status})")]
    AuthFailed { status: u16, body: ResponseBody },

    /// HTTP 429 Too Many Requests.
    #[error("Rate limited (429)")]
    RateLimited,

    /// A successful status whose body is not valid JSON.
    #[error("Response body is not valid JSON")]
    InvalidJson { body: String },

    /// Any other error status (>= 400).
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Transport-level failure (DNS, connection refused, protocol error).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The endpoint URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without credentials.
    #[error("Credentials are required to build the client")]
    MissingCredentials,
}

impl ClientError {
    /// Map a reqwest failure, separating timeouts from other transport errors.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::HttpError(err)
        }
    }
}
