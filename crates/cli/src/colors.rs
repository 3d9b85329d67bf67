//! Terminal color support.
//!
//! Honors NO_COLOR (https://no-color.org/) and the CLICOLOR conventions:
//! - `NO_COLOR`: if set (to any value), disable colors
//! - `CLICOLOR_FORCE`: if set to non-zero, force colors even when not a TTY
//! - `CLICOLOR`: if set to 0, disable colors
//!
//! Otherwise colors are enabled only when stdout is a terminal.

use colored::control;

/// Configure color output for the whole program. Call once, early in main().
pub fn init_colors() {
    control::set_override(colors_enabled(
        |key| std::env::var(key).ok(),
        std::io::IsTerminal::is_terminal(&std::io::stdout()),
    ));
}

fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    // NO_COLOR takes precedence over everything
    if var("NO_COLOR").is_some() {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }
    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }
    is_tty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_tty_default() {
        assert!(colors_enabled(env(&[]), true));
        assert!(!colors_enabled(env(&[]), false));
    }

    #[test]
    fn test_no_color_wins() {
        assert!(!colors_enabled(
            env(&[("NO_COLOR", ""), ("CLICOLOR_FORCE", "1")]),
            true
        ));
    }

    #[test]
    fn test_clicolor_force() {
        assert!(colors_enabled(env(&[("CLICOLOR_FORCE", "1")]), false));
        assert!(!colors_enabled(env(&[("CLICOLOR_FORCE", "0")]), false));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!colors_enabled(env(&[("CLICOLOR", "0")]), true));
    }
}
