// 🔤 Text Escaper
// Two orthogonal concerns kept apart:
// - escaping text for a double-quoted, pipe-delimited field
// - rendering an absent value as the loader's NULL sentinel

use serde::{Deserialize, Serialize};

/// Token a bulk loader reads as a real SQL NULL (never as empty string)
pub const NULL_SENTINEL: &str = "NULL";

/// How an absent value is rendered in a column that is normally quoted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullStyle {
    /// `NULL` unquoted: the loader sees a true null
    #[default]
    Bare,

    /// `"NULL"` quoted: byte-compatible with the legacy reference output
    Quoted,
}

/// Double every embedded `"` (SQL-style escaping inside quoted fields)
pub fn escape_text(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Escape and wrap in double quotes
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape_text(text))
}

/// Render an optional value, substituting the NULL sentinel when absent
///
/// `render` decides how a present value looks (quoted text, bare number...).
/// The sentinel itself never passes through `render`.
pub fn render_optional<T, F>(value: Option<T>, render: F) -> String
where
    F: FnOnce(T) -> String,
{
    match value {
        Some(v) => render(v),
        None => NULL_SENTINEL.to_string(),
    }
}

impl NullStyle {
    /// Render an optional text column that is quoted when present
    pub fn quoted_or_null(&self, value: Option<&str>) -> String {
        match self {
            NullStyle::Bare => render_optional(value, quote),
            NullStyle::Quoted => quote(value.unwrap_or(NULL_SENTINEL)),
        }
    }

    /// Render an optional column that is never quoted (numbers, timestamps)
    pub fn bare_or_null(&self, value: Option<&str>) -> String {
        render_optional(value, str::to_string)
    }
}
