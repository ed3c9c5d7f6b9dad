//! hext: plain-text extraction from parsed HTML trees
//!
//! This library walks an already-parsed HTML node tree and writes the
//! visible text to a streaming sink, preserving paragraph and line-break
//! structure while discarding markup, scripting, and non-visible content.

pub mod error;
pub mod extract;
pub mod sink;

/// Named extraction profiles
///
/// The two rule sets shipped with the crate. `Readable` separates
/// paragraph-level blocks with blank lines and drops navigational link
/// runs; `Compact` emits a single newline after every block, which suits
/// indexing pipelines that only need token boundaries.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Readable,
    Compact,
}

impl Profile {
    /// Build the policy this profile names
    pub fn policy(&self) -> ExtractPolicy {
        match self {
            Profile::Readable => ExtractPolicy::readable(),
            Profile::Compact => ExtractPolicy::compact(),
        }
    }
}

// Re-export commonly used types
pub use error::ExtractError;
pub use extract::{ExtractPolicy, NewlineTrigger, TextExtractor, html_to_text};
pub use sink::{IoSink, TextSink};
