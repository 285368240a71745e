//! The feature graph snapshot and its read-only query surface.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::{Error, FileId, Result};

use super::{Document, Feature, FeatureId, Occurrence, SourceRange};

/// Index into [`FeatureGraph::occurrences`].
pub(crate) type OccurrenceIdx = usize;

/// Which features [`FeatureGraph::all_features`] enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Workspace,
    Document(FileId),
}

/// An immutable, internally consistent snapshot of the component graph.
///
/// Built once by [`FeatureGraphBuilder`](super::FeatureGraphBuilder) and
/// never mutated afterwards. A document change produces a new snapshot, so
/// any number of queries can read one concurrently.
#[derive(Debug, Default)]
pub struct FeatureGraph {
    pub(crate) version: u64,
    /// Documents by path, in analysis order (`FileId` = position).
    pub(crate) documents: IndexMap<Arc<str>, Document>,
    /// All features; `FeatureId` = position.
    pub(crate) features: Vec<Feature>,
    /// Tag name → element (first declaration in analysis order).
    pub(crate) elements: FxHashMap<SmolStr, FeatureId>,
    /// Behavior name → behavior (first declaration in analysis order).
    pub(crate) behaviors: FxHashMap<SmolStr, FeatureId>,
    pub(crate) occurrences: Vec<Occurrence>,
    /// Per document: features declared there, by start offset.
    pub(crate) features_by_file: Vec<Vec<FeatureId>>,
    /// Per document: occurrences located there, by name start offset.
    pub(crate) occurrences_by_file: Vec<Vec<OccurrenceIdx>>,
    /// Target → occurrences, by (document path, start offset).
    pub(crate) occurrences_by_target: FxHashMap<FeatureId, Vec<OccurrenceIdx>>,
}

impl FeatureGraph {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a snapshot.
    pub fn builder() -> super::FeatureGraphBuilder {
        super::FeatureGraphBuilder::new()
    }

    /// Version stamp assigned by the analyzer.
    pub fn version(&self) -> u64 {
        self.version
    }

    // ==================== Documents ====================

    pub fn document(&self, file: FileId) -> Result<&Document> {
        self.documents
            .get_index(file.index())
            .map(|(_, doc)| doc)
            .ok_or_else(|| Error::unknown_document(file.to_string()))
    }

    pub fn document_by_path(&self, path: &str) -> Result<&Document> {
        self.documents
            .get(path)
            .ok_or_else(|| Error::unknown_document(path))
    }

    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.documents
            .get_index_of(path)
            .map(|index| FileId::new(index as u32))
    }

    /// Documents in analysis order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    // ==================== Features ====================

    /// Get a feature by id. Ids are only valid for the snapshot that issued them.
    pub fn feature(&self, id: FeatureId) -> &Feature {
        &self.features[id.index()]
    }

    pub fn element_id(&self, name: &str) -> Option<FeatureId> {
        self.elements.get(name).copied()
    }

    pub fn element(&self, name: &str) -> Option<&Feature> {
        self.element_id(name).map(|id| self.feature(id))
    }

    pub fn behavior_id(&self, name: &str) -> Option<FeatureId> {
        self.behaviors.get(name).copied()
    }

    pub fn behavior(&self, name: &str) -> Option<&Feature> {
        self.behavior_id(name).map(|id| self.feature(id))
    }

    /// Features in scope, ordered by document analysis order, then
    /// declaration offset.
    pub fn all_features(&self, scope: Scope) -> Result<Vec<&Feature>> {
        match scope {
            Scope::Workspace => Ok(self
                .features_by_file
                .iter()
                .flatten()
                .map(|&id| self.feature(id))
                .collect()),
            Scope::Document(file) => {
                self.document(file)?;
                Ok(self.features_by_file[file.index()]
                    .iter()
                    .map(|&id| self.feature(id))
                    .collect())
            }
        }
    }

    /// The innermost feature whose declaration, or one of whose occurrences,
    /// covers `offset`.
    pub fn feature_at(&self, file: FileId, offset: TextSize) -> Result<Option<&Feature>> {
        self.document(file)?;

        let declared = self.features_by_file[file.index()]
            .iter()
            .map(|&id| self.feature(id))
            .filter(|feature| feature.range.contains(file, offset))
            .map(|feature| (feature.range.len(), feature.id));

        let used = self
            .occurrences_at(file, offset)
            .filter_map(|occurrence| Some((occurrence.name_range.len(), occurrence.target?)));

        Ok(declared
            .chain(used)
            .min_by_key(|&(len, _)| len)
            .map(|(_, id)| self.feature(id)))
    }

    // ==================== Occurrences ====================

    /// All occurrences located in a document, by name start offset.
    pub fn occurrences_in(&self, file: FileId) -> Result<Vec<&Occurrence>> {
        self.document(file)?;
        Ok(self.occurrences_by_file[file.index()]
            .iter()
            .map(|&idx| &self.occurrences[idx])
            .collect())
    }

    /// Occurrences in `file` whose name token covers `offset`.
    pub(crate) fn occurrences_at(
        &self,
        file: FileId,
        offset: TextSize,
    ) -> impl Iterator<Item = &Occurrence> {
        self.occurrences_by_file
            .get(file.index())
            .into_iter()
            .flatten()
            .map(|&idx| &self.occurrences[idx])
            .take_while(move |occurrence| occurrence.name_range.range.start() <= offset)
            .filter(move |occurrence| occurrence.name_range.contains(file, offset))
    }

    /// Every known use of a feature across the workspace, ordered by
    /// (document path, start offset).
    pub fn occurrences_of(&self, feature: FeatureId) -> Vec<&Occurrence> {
        self.occurrences_by_target
            .get(&feature)
            .map(|indices| indices.iter().map(|&idx| &self.occurrences[idx]).collect())
            .unwrap_or_default()
    }

    /// Path of the document containing a range.
    pub fn path_of(&self, range: &SourceRange) -> Result<&Arc<str>> {
        self.document(range.file).map(|doc| &doc.path)
    }
}
