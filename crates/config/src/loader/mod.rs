//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `RAPIDAPI_KEY` and `RAPIDAPI_HOST` from a `.env` file and the environment.
//! - Provide a builder-pattern `ConfigLoader` that produces immutable `Credentials`.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Reporting errors to the user or choosing exit codes (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Empty or whitespace-only values are treated as unset.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
