//! Colorized, indented rendering of JSON values.
//!
//! Layout rules, by value kind:
//! - object: one `key: value` line per scalar entry; nested objects and
//!   arrays get a `key:` line followed by their contents one level deeper
//! - array: a 1-indexed `[i]` marker line per element, contents one level deeper
//! - scalar: a single line, strings unquoted
//!
//! Each level indents by four spaces. Keys are cyan, scalars yellow, and
//! array markers magenta.

use std::borrow::Cow;
use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;

const INDENT_UNIT: &str = "    ";

const BANNER: &str = "\
╔══════════════════════════════════════╗
║       CELUZADOR LOOKUP CLIENT        ║
╚══════════════════════════════════════╝";

/// Print the startup banner.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}\n", BANNER.green())
}

/// Render `value` at nesting level `depth`.
pub fn print_structured(out: &mut impl Write, value: &Value, depth: usize) -> io::Result<()> {
    let indent = INDENT_UNIT.repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if is_container(child) {
                    writeln!(out, "{indent}{}:", key.cyan())?;
                    print_structured(out, child, depth + 1)?;
                } else {
                    writeln!(out, "{indent}{}: {}", key.cyan(), scalar_text(child).yellow())?;
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                writeln!(out, "{indent}{}", format!("[{}]", i + 1).magenta())?;
                print_structured(out, item, depth + 1)?;
            }
        }
        scalar => writeln!(out, "{indent}{}", scalar_text(scalar).yellow())?,
    }
    Ok(())
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
