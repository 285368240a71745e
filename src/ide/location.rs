//! Line/column locations returned to the caller.

use std::sync::Arc;

use crate::base::{FileId, Result, Span};
use crate::hir::{FeatureGraph, SourceRange};

/// A zero-based line/column range in a named document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Location {
    #[cfg_attr(feature = "interchange", serde(skip))]
    pub file: FileId,
    /// Workspace-relative path of the document.
    pub path: Arc<str>,
    pub span: Span,
}

impl Location {
    /// Render a character range through its document's line index.
    pub fn from_range(graph: &FeatureGraph, range: &SourceRange) -> Result<Self> {
        let document = graph.document(range.file)?;
        Ok(Self {
            file: range.file,
            path: document.path.clone(),
            span: document.line_index.span(range.range)?,
        })
    }
}
