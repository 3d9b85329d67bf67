//! Celuzador CLI - look up phone numbers through the Celuzador RapidAPI service.
//!
//! Responsibilities:
//! - Load `.env` and resolve RapidAPI credentials before anything else.
//! - Parse command-line arguments or prompt for the phone number.
//! - Run a single lookup and print the outcome with colors.
//!
//! Does NOT handle:
//! - Request building or response classification (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Missing credentials or an empty phone number exit with code 1 before any network call.
//! - Lookup failures are reported but never change the exit code.

mod args;
mod colors;
mod commands;
mod error;
mod interactive;
mod printer;

use std::time::Duration;

use args::Cli;
use celuzador_client::CeluzadorClient;
use celuzador_config::ConfigLoader;
use clap::Parser;
use error::{CliError, ExitCode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with lookup output
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    colors::init_colors();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", e.render());
            ExitCode::from(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let credentials = ConfigLoader::new().from_env()?.build()?;

    let mut stdout = std::io::stdout();
    printer::print_banner(&mut stdout)?;

    let raw = match cli.phone_number {
        Some(number) => number,
        None => interactive::prompt_phone_number().map_err(CliError::Prompt)?,
    };
    let phone_number =
        interactive::normalize_phone_number(&raw).ok_or(CliError::EmptyPhoneNumber)?;

    let mut builder = CeluzadorClient::builder()
        .credentials(&credentials)
        .timeout(Duration::from_secs(cli.timeout));
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;

    commands::lookup::run(&client, &phone_number, &mut stdout).await?;
    Ok(())
}
