//! Configuration management for the Celuzador lookup client.
//!
//! This crate resolves the RapidAPI credentials the client needs from a
//! `.env` file and the process environment.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::Credentials;
