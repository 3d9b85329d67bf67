//! CLI exit codes and fatal errors.
//!
//! Responsibilities:
//! - Define the structured exit codes of the `celuzador` binary.
//! - Define the errors that abort the program before or around the lookup.
//!
//! Does NOT handle:
//! - Lookup outcomes (auth, rate limit, timeout...). Those are reported by
//!   `commands::lookup` and never change the exit code.
//!
//! Invariants:
//! - Every `CliError` maps to a non-zero exit code.

use celuzador_client::ClientError;
use celuzador_config::ConfigError;
use colored::Colorize;
use thiserror::Error;

/// Structured exit codes for celuzador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The lookup ran, whatever its outcome.
    Success = 0,

    /// Missing configuration, empty input, or another fatal failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors that terminate the program.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("A valid phone number is required")]
    EmptyPhoneNumber,

    #[error("Failed to read the phone number: {0:#}")]
    Prompt(anyhow::Error),

    #[error("Failed to create the lookup client: {0}")]
    Client(#[from] ClientError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// The message shown on stderr before exiting.
    ///
    /// Missing credentials include an example `.env` file.
    pub fn render(&self) -> String {
        match self {
            Self::Config(ConfigError::MissingEnvVar(var)) => format!(
                "{}\nExample of a correct .env file:\n{}",
                format!("Missing {var}: set RAPIDAPI_KEY and RAPIDAPI_HOST in the environment or a .env file").red(),
                ConfigError::example_env()
            ),
            other => other.to_string().red().to_string(),
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(_: &CliError) -> Self {
        ExitCode::GeneralError
    }
}
