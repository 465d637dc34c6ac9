// src/output/escape.rs
//! Escaping for text embedded in single-quoted script string literals.

use once_cell::sync::Lazy;
use regex::Regex;

// An existing backslash pair, or a bare single quote.
static ESCAPE_SEQUENCE_OR_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\(.)|(')").expect("escape pattern is valid"));

/// Makes `text` safe inside `'...'` in generated module source.
///
/// Backslash pairs already present are kept as they are, bare single quotes
/// gain a backslash, then newlines and carriage returns become `\n` and `\r`.
/// Apply exactly once per string.
pub fn escape_for_js(text: &str) -> String {
    ESCAPE_SEQUENCE_OR_QUOTE
        .replace_all(text, r"\${1}${2}")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
