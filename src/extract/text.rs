//! Text-node normalization
//!
//! Raw text content arrives possibly entity-encoded and spread across
//! multiple lines of source markup. Normalization decodes entities, trims
//! the ends, and collapses every interior whitespace run to one space.

use once_cell::sync::Lazy;
use regex::Regex;

// Any run of whitespace, including newlines and tabs
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Decode HTML entities, trim, and collapse whitespace runs to single spaces
pub(crate) fn normalize_text(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    WHITESPACE_RUN.replace_all(decoded.trim(), " ").into_owned()
}
