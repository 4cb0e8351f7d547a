//! JVM and program argument normalization
//!
//! Arguments arrive as free-form strings and are often wrapped over several
//! lines in the descriptor. They end up inside a double-quoted shell
//! assignment, so they are flattened to a single line of space-separated
//! tokens and double quotes are refused outright.

use crate::error::{Result, descriptor as errors};

/// Non-breaking spaces keep two tokens together; everything else that is
/// whitespace splits.
fn is_breaking_whitespace(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// Normalize a raw argument string into one shell-safe line
///
/// An absent value is treated as the empty string.
pub fn normalize(raw: Option<&str>) -> Result<String> {
    let raw = raw.unwrap_or_default();

    if raw.contains('"') {
        return Err(errors::unsupported_character(raw));
    }

    let tokens: Vec<&str> = raw
        .split(is_breaking_whitespace)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    Ok(tokens.join(" "))
}
