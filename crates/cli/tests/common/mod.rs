//! Shared test utilities for celuzador integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `RAPIDAPI_KEY` / `RAPIDAPI_HOST` are set to dummy values unless overridden.
//! - Output is uncolored (`NO_COLOR=1`) so assertions can match plain text.

use assert_cmd::Command;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_HOST: &str = "celuzador.p.rapidapi.com";

/// Returns a hermetic `celuzador` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials are set to dummy values to satisfy config validation.
/// - Other env vars that change behavior are cleared.
pub fn celuzador_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("celuzador");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("RAPIDAPI_KEY", TEST_API_KEY)
        .env("RAPIDAPI_HOST", TEST_API_HOST)
        .env("NO_COLOR", "1");

    // Clear potential host leakage
    cmd.env_remove("CELUZADOR_TIMEOUT")
        .env_remove("CELUZADOR_BASE_URL")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `celuzador` command that posts to `base_url`.
#[allow(dead_code)]
pub fn celuzador_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = celuzador_cmd();
    cmd.env("CELUZADOR_BASE_URL", base_url);
    cmd
}
