//! The phone-number lookup endpoint.
//!
//! Responsibilities:
//! - Build the RapidAPI-authenticated form POST for one phone number.
//! - Classify the response by status code and decode the body.
//!
//! Does NOT handle:
//! - Printing results or choosing what the user sees (see the CLI crate).
//! - Retries. Every outcome is terminal for the request.

use std::time::Duration;

use celuzador_config::Credentials;
use celuzador_config::constants::PHONE_FORM_FIELD;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::models::ResponseBody;

pub(crate) const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
pub(crate) const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

/// Look up `phone_number`, returning the decoded JSON body.
///
/// `timeout` must match the one configured on `client`; it is only used to
/// report [`ClientError::Timeout`].
pub(crate) async fn lookup(
    client: &Client,
    url: &str,
    credentials: &Credentials,
    phone_number: &str,
    timeout: Duration,
) -> Result<Value> {
    debug!(url, "Sending lookup request");

    // `form` sets content-type: application/x-www-form-urlencoded.
    let response = client
        .post(url)
        .header(RAPIDAPI_KEY_HEADER, credentials.api_key())
        .header(RAPIDAPI_HOST_HEADER, credentials.api_host())
        .form(&[(PHONE_FORM_FIELD, phone_number)])
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    debug!(status, bytes = body.len(), "Received lookup response");
    classify_response(status, url, body)
}

/// Classify a completed response.
///
/// - 401/403: [`ClientError::AuthFailed`] carrying the body.
/// - 429: [`ClientError::RateLimited`].
/// - any other status >= 400: [`ClientError::ApiError`].
/// - otherwise the body must decode as JSON, else [`ClientError::InvalidJson`].
pub(crate) fn classify_response(status: u16, url: &str, body: String) -> Result<Value> {
    match status {
        401 | 403 => {
            warn!(status, "Lookup rejected by API");
            Err(ClientError::AuthFailed {
                status,
                body: ResponseBody::from_text(body),
            })
        }
        429 => {
            warn!("Lookup rate limited");
            Err(ClientError::RateLimited)
        }
        s if s >= 400 => {
            let message = if body.trim().is_empty() {
                StatusCode::from_u16(s)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                body
            };
            Err(ClientError::ApiError {
                status: s,
                url: url.to_string(),
                message,
            })
        }
        _ => serde_json::from_str(&body).map_err(|e| {
            debug!(error = %e, "Lookup response is not JSON");
            ClientError::InvalidJson { body }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://celuzador.p.rapidapi.com/";

    #[test]
    fn test_classify_success_json() {
        let value = classify_response(200, URL, r#"{"nombre":"Juan"}"#.to_string()).unwrap();
        assert_eq!(value, json!({"nombre": "Juan"}));
    }

    #[test]
    fn test_classify_success_invalid_json() {
        let err = classify_response(200, URL, "not json".to_string()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidJson { ref body } if body == "not json"));
    }

    #[test]
    fn test_classify_auth_statuses() {
        for status in [401, 403] {
            let err = classify_response(status, URL, r#"{"message":"nope"}"#.to_string())
                .unwrap_err();
            match err {
                ClientError::AuthFailed { status: s, body } => {
                    assert_eq!(s, status);
                    assert_eq!(body, ResponseBody::Json(json!({"message": "nope"})));
                }
                other => panic!("Expected AuthFailed, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_classify_auth_keeps_raw_text() {
        let err = classify_response(403, URL, "Forbidden".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ClientError::AuthFailed { body: ResponseBody::Text(ref t), .. } if t == "Forbidden"
        ));
    }

    #[test]
    fn test_classify_rate_limited() {
        let err = classify_response(429, URL, "slow down".to_string()).unwrap_err();
        assert!(matches!(err, ClientError::RateLimited));
    }

    #[test]
    fn test_classify_other_error_status() {
        let err = classify_response(500, URL, "boom".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiError { status: 500, ref message, .. } if message == "boom"
        ));
    }

    #[test]
    fn test_classify_error_status_empty_body_uses_reason() {
        let err = classify_response(404, URL, "  ".to_string()).unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiError { status: 404, ref message, .. } if message == "Not Found"
        ));
    }

    #[test]
    fn test_classify_scalar_json_is_success() {
        let value = classify_response(200, URL, "42".to_string()).unwrap();
        assert_eq!(value, json!(42));
    }
}
