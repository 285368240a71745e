//! Document identifiers.

/// Identifies a document within one feature graph snapshot.
///
/// Ids are dense and assigned in analysis order, so comparing two ids
/// compares the order in which the analyzer handed the documents over.
/// They are only meaningful together with the snapshot that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Index of the document in analysis order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
