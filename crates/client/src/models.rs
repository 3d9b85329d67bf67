//! Data models for Celuzador API responses.

use serde_json::Value;

/// A response body that may or may not be JSON.
///
/// Error responses from the gateway are not guaranteed to be JSON, so the
/// raw text is kept when decoding fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Decode `text` as JSON, falling back to the raw text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}
