//! Foundation types for the navigation core.
//!
//! This module provides the primitives every other layer builds on:
//! - [`FileId`] - Per-snapshot document identifiers
//! - [`TextRange`], [`TextSize`] - Character offsets into a document
//! - [`LineIndex`] - Offset ↔ line/column conversion (the position mapper)
//! - [`Position`], [`Span`] - Zero-based line/column positions
//! - [`Error`], [`Result`] - Errors surfaced to callers
//!
//! This module has NO dependencies on other polynav modules.

mod error;
mod file_id;
mod line_index;
mod position;

pub use error::{Error, Result};
pub use file_id::FileId;
pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
