//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the RapidAPI credential variables into a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Non-UTF-8 values are an error, not silently unset.
//! - Values set explicitly on the loader are never overwritten.

use std::env::VarError;

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_HOST, ENV_API_KEY};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if the value is not valid UTF-8.
pub(crate) fn env_var_or_none(key: &str) -> Result<Option<String>, ConfigError> {
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(_)) => return Err(ConfigError::InvalidEnvVar(key.to_string())),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else if trimmed.len() == value.len() {
        Ok(Some(value))
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Apply environment variable configuration to the loader.
pub(crate) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if !loader.has_api_key()
        && let Some(key) = env_var_or_none(ENV_API_KEY)?
    {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if !loader.has_api_host()
        && let Some(host) = env_var_or_none(ENV_API_HOST)?
    {
        loader.set_api_host(Some(host));
    }

    Ok(())
}
