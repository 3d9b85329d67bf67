//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Prompt for the phone number when it was not given as an argument
//! - Normalize user input before it reaches the client

use anyhow::Result;
use std::io::{BufRead, IsTerminal, Write};

const PHONE_PROMPT: &str = "Enter the phone number (with country code)";

/// Prompt the user for a phone number.
///
/// Uses an interactive `dialoguer` prompt on a terminal and falls back to a
/// plain line read when stdin is piped.
pub fn prompt_phone_number() -> Result<String> {
    if std::io::stdin().is_terminal() {
        let input: String = dialoguer::Input::new()
            .with_prompt(PHONE_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(input);
    }

    print!("{}: ", PHONE_PROMPT);
    std::io::stdout().flush()?;
    read_line(std::io::stdin().lock())
}

fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input)
}

/// Trim surrounding whitespace, rejecting empty input.
pub fn normalize_phone_number(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(
            normalize_phone_number("  51987654321\n"),
            Some("51987654321".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_phone_number(""), None);
        assert_eq!(normalize_phone_number(" \t\n"), None);
    }

    #[test]
    fn test_read_line_stops_at_newline() {
        let input = read_line("51987654321\nignored\n".as_bytes()).unwrap();
        assert_eq!(input, "51987654321\n");
    }

    #[test]
    fn test_read_line_eof_is_empty() {
        assert_eq!(read_line("".as_bytes()).unwrap(), "");
    }
}
