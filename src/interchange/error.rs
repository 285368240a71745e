//! Error types for snapshot interchange.

use thiserror::Error;

use crate::hir::GraphError;

/// Errors that can occur while loading or writing a snapshot description.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// A range or document entry names a path that is not in `documents`.
    #[error("Unknown document path: {0}")]
    UnknownPath(String),

    /// A range whose start lies after its end.
    #[error("Invalid range {start}..{end} in '{path}'")]
    InvalidRange { path: String, start: u32, end: u32 },

    /// The description was well-formed but the graph rejected it.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create an unknown path error.
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath(path.into())
    }
}
