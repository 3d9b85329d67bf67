//! Resolved configuration types.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::API_SCHEME;

/// RapidAPI credentials, resolved once at startup.
///
/// Both fields are guaranteed non-empty and trimmed by
/// [`ConfigLoader::build`](crate::ConfigLoader::build).
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: SecretString,
    api_host: String,
}

impl Credentials {
    pub(crate) fn new(api_key: SecretString, api_host: String) -> Self {
        Self { api_key, api_host }
    }

    /// The API key. Callers must not log this value.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// The lookup endpoint: fixed scheme, configured host, root path.
    pub fn endpoint_url(&self) -> String {
        format!("{}://{}/", API_SCHEME, self.api_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new(
            SecretString::new("super-secret-key".into()),
            "celuzador.p.rapidapi.com".to_string(),
        )
    }

    #[test]
    fn test_endpoint_url_uses_https_root() {
        assert_eq!(
            credentials().endpoint_url(),
            "https://celuzador.p.rapidapi.com/"
        );
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let debug = format!("{:?}", credentials());
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("celuzador.p.rapidapi.com"));
    }

    #[test]
    fn test_accessors() {
        let creds = credentials();
        assert_eq!(creds.api_key(), "super-secret-key");
        assert_eq!(creds.api_host(), "celuzador.p.rapidapi.com");
    }
}
