//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not prompt for missing input (see `interactive` module).

use celuzador_config::constants::DEFAULT_TIMEOUT_SECS;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "celuzador")]
#[command(
    about = "Query the Celuzador API (RapidAPI) for technical information about a phone number",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  celuzador 51987654321\n  celuzador --timeout 30 51987654321\n  celuzador            (prompts for the number)\n\nRequires RAPIDAPI_KEY and RAPIDAPI_HOST in the environment or a .env file.\n"
)]
pub struct Cli {
    /// Full phone number including country code (e.g. 51987654321).
    ///
    /// Prompted for interactively when omitted.
    #[arg(value_name = "NUMERO")]
    pub phone_number: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "CELUZADOR_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Post lookups to this URL instead of https://<RAPIDAPI_HOST>/
    #[arg(long, env = "CELUZADOR_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}
