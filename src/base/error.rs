//! Errors surfaced to callers of the navigation core.
//!
//! Only malformed requests are errors. A query that simply finds nothing
//! returns `Ok(None)` or an empty list instead.

use thiserror::Error;

/// Errors that can occur while answering a navigation query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The query names a document that is not part of the current snapshot.
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// A character offset past the end of the document.
    #[error("Offset {offset} is out of range (document length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A line/column pair that does not address a character of the document.
    #[error("Position {line}:{column} is out of range")]
    PositionOutOfRange { line: usize, column: usize },
}

impl Error {
    /// Create an unknown-document error.
    pub fn unknown_document(path: impl Into<String>) -> Self {
        Self::UnknownDocument(path.into())
    }

    /// Check if this is an out-of-range error (offset or position).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::OffsetOutOfRange { .. } | Self::PositionOutOfRange { .. }
        )
    }
}

/// Result type for navigation queries.
pub type Result<T> = std::result::Result<T, Error>;
