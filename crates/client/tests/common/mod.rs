//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

use celuzador_client::CeluzadorClient;
use celuzador_config::{ConfigLoader, Credentials};

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_HOST: &str = "celuzador.p.rapidapi.com";

/// Credentials used by every test client.
pub fn test_credentials() -> Credentials {
    ConfigLoader::new()
        .with_api_key(TEST_API_KEY.to_string())
        .with_api_host(TEST_API_HOST.to_string())
        .build()
        .expect("test credentials are complete")
}

/// A client that posts to `base_url` instead of the real RapidAPI host.
#[allow(dead_code)]
pub fn client_for(base_url: &str, timeout: Duration) -> CeluzadorClient {
    CeluzadorClient::builder()
        .credentials(&test_credentials())
        .base_url(base_url.to_string())
        .timeout(timeout)
        .build()
        .expect("test client builds")
}
