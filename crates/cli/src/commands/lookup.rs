//! The lookup command: query the API and report the outcome.
//!
//! Responsibilities:
//! - Announce the endpoint being queried.
//! - Print a decoded response through the structured printer.
//! - Turn every lookup failure into a distinct, colored message.
//!
//! Invariants:
//! - Lookup failures are reported here and never propagate as errors; only
//!   output write failures do.

use std::io::{self, Write};

use celuzador_client::{CeluzadorClient, ClientError, ResponseBody};
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use crate::printer::print_structured;

/// Look up `phone_number` and print the outcome to `out`.
pub async fn run(
    client: &CeluzadorClient,
    phone_number: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}\n",
        "Querying Celuzador API:".cyan(),
        client.url()
    )?;
    out.flush()?;

    debug!(
        timeout_secs = client.timeout().as_secs(),
        "Dispatching lookup"
    );
    let result = client.lookup(phone_number).await;
    report(result, out)
}

/// Print the outcome of a lookup.
pub fn report(result: Result<Value, ClientError>, out: &mut impl Write) -> io::Result<()> {
    let err = match result {
        Ok(value) => {
            writeln!(out, "{}\n", "Response received successfully:".green())?;
            return print_structured(out, &value, 0);
        }
        Err(err) => err,
    };

    debug!(error = %err, "Lookup failed");
    match err {
        ClientError::AuthFailed { status, body } => {
            writeln!(
                out,
                "{}",
                format!(
                    "Authentication error ({status}): invalid API key or no active subscription."
                )
                .red()
            )?;
            match body {
                ResponseBody::Json(value) => print_structured(out, &value, 0),
                ResponseBody::Text(text) => writeln!(out, "{text}"),
            }
        }
        ClientError::RateLimited => writeln!(
            out,
            "{}",
            "Rate limit reached (429). Wait or review your RapidAPI plan.".red()
        ),
        ClientError::InvalidJson { body } => {
            writeln!(out, "{}", "Error: the response is not valid JSON.".red())?;
            writeln!(out, "{body}")
        }
        ClientError::Timeout(duration) => writeln!(
            out,
            "{}",
            format!(
                "Timeout: the request exceeded the {}s timeout.",
                duration.as_secs()
            )
            .red()
        ),
        ClientError::HttpError(e) => {
            writeln!(out, "{}", format!("Request error: {e}").red())
        }
        err @ ClientError::ApiError { .. } => {
            writeln!(out, "{}", format!("Request error: {err}").red())
        }
        // Raised while building the client, never by a lookup.
        err @ (ClientError::InvalidUrl(_) | ClientError::MissingCredentials) => {
            writeln!(out, "{}", format!("Request error: {err}").red())
        }
    }
}
