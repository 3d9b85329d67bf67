//! Centralized constants for the Celuzador client workspace.
//!
//! Values shared between the config, client, and CLI crates live here so
//! environment variable names and wire details are defined exactly once.

// =============================================================================
// Environment Variables
// =============================================================================

/// RapidAPI key sent as `x-rapidapi-key`.
pub const ENV_API_KEY: &str = "RAPIDAPI_KEY";

/// Bare RapidAPI hostname, e.g. `celuzador.p.rapidapi.com`.
pub const ENV_API_HOST: &str = "RAPIDAPI_HOST";

/// Setting this to `1` or `true` skips `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Request Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Scheme used to reach the RapidAPI host.
pub const API_SCHEME: &str = "https";

/// Client identifier sent on every request.
pub const USER_AGENT: &str = "celuzador-client/1.0";

/// Form field carrying the phone number.
pub const PHONE_FORM_FIELD: &str = "telefono";

/// Host shown in the example `.env` when configuration is missing.
pub const EXAMPLE_API_HOST: &str = "celuzador.p.rapidapi.com";
