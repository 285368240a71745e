//! Source documents held by a feature graph snapshot.

use std::sync::Arc;

use crate::base::{FileId, LineIndex};

/// What kind of source a document is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum DocumentKind {
    /// HTML, possibly with inline `<script>` regions.
    Markup,
    /// A standalone JavaScript file.
    Script,
}

impl DocumentKind {
    /// Guess the kind from a file extension, defaulting to markup.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.').map(|(_, ext)| ext) {
            Some("js" | "mjs" | "ts") => Self::Script,
            _ => Self::Markup,
        }
    }
}

/// A document as analyzed for one snapshot. Immutable once built.
#[derive(Clone, Debug)]
pub struct Document {
    pub id: FileId,
    /// Workspace-relative path.
    pub path: Arc<str>,
    pub kind: DocumentKind,
    pub text: Arc<str>,
    pub line_index: LineIndex,
}

impl Document {
    pub(crate) fn new(id: FileId, path: Arc<str>, kind: DocumentKind, text: Arc<str>) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            id,
            path,
            kind,
            text,
            line_index,
        }
    }
}
