//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that collects credential values.
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//! - Build the final `Credentials`, rejecting missing values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{ENV_API_HOST, ENV_API_KEY, ENV_DOTENV_DISABLED};
use crate::types::Credentials;

/// Configuration loader that builds credentials from `.env` and the environment.
#[derive(Default)]
pub struct ConfigLoader {
    api_key: Option<SecretString>,
    api_host: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// A missing `.env` file is silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("dotenv loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read credentials from `RAPIDAPI_KEY` and `RAPIDAPI_HOST`.
    ///
    /// Values already set through `with_*` methods are kept.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API key directly. Surrounding whitespace is trimmed.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.trim().into()));
        self
    }

    /// Set the API host directly. Surrounding whitespace is trimmed.
    pub fn with_api_host(mut self, host: String) -> Self {
        self.api_host = Some(host.trim().to_string());
        self
    }

    pub(crate) fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn has_api_host(&self) -> bool {
        self.api_host.is_some()
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_api_host(&mut self, host: Option<String>) {
        self.api_host = host;
    }

    /// Build the final credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` naming the first absent value,
    /// checking the API key before the host.
    pub fn build(self) -> Result<Credentials, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_KEY.to_string()))?;

        let api_host = self
            .api_host
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_HOST.to_string()))?;

        Ok(Credentials::new(api_key, api_host))
    }
}
