//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests that touch process-global state (env vars, cwd) take `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
