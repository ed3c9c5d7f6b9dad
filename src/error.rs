//! Error types for extraction failures
//!
//! Extraction itself is total over well-formed trees; everything that can
//! fail sits at the boundary (policy construction, pathological input
//! depth, sink writes) and is surfaced immediately rather than swallowed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A tag was listed in more than one policy set
    #[error("tag `{tag}` appears in more than one policy set")]
    ConflictingPolicy { tag: String },

    /// The tree nests deeper than the traversal is willing to recurse
    #[error("document tree nests deeper than {max} levels")]
    TreeTooDeep { max: usize },

    /// The output sink rejected a write; traversal stops at the failure
    /// with whatever prefix was already written
    #[error("failed to write extracted text to the output sink")]
    Sink(#[from] std::io::Error),
}
