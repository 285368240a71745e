//! Snapshot construction.
//!
//! The builder is the boundary with the analyzer: it receives documents and
//! declaration/occurrence descriptions, validates them, links every
//! occurrence to the feature it denotes and freezes the result into a
//! [`FeatureGraph`].

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::FileId;

use super::graph::OccurrenceIdx;
use super::naming::binding_root;
use super::{
    BehaviorDecl, Document, DocumentKind, ElementDecl, Feature, FeatureGraph, FeatureId,
    FeatureKind, Occurrence, OccurrenceDecl, OccurrenceKind, PropertyDecl, SourceRange,
};

/// Errors raised while assembling a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The same path was added twice.
    #[error("Duplicate document: {0}")]
    DuplicateDocument(String),

    /// A range refers to a document that was never added.
    #[error("Range refers to unknown {0}")]
    UnknownFile(FileId),

    /// A range extends past the end of its document.
    #[error("Range {start}..{end} is out of bounds in '{path}' (length {len})")]
    RangeOutOfBounds {
        path: String,
        start: u32,
        end: u32,
        len: u32,
    },

    /// Registrations come from element declarations only.
    #[error("Registration occurrences are derived from element declarations: '{0}'")]
    UnexpectedRegistration(SmolStr),
}

/// Collects analyzer output for one snapshot.
#[derive(Debug, Default)]
pub struct FeatureGraphBuilder {
    version: u64,
    documents: IndexMap<Arc<str>, Document>,
    elements: Vec<ElementDecl>,
    behaviors: Vec<BehaviorDecl>,
    occurrences: Vec<OccurrenceDecl>,
}

impl FeatureGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the snapshot with the analyzer's version counter.
    pub fn version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Add a document. Documents are analyzed in the order they are added.
    pub fn add_document(
        &mut self,
        path: &str,
        kind: DocumentKind,
        text: &str,
    ) -> Result<FileId, GraphError> {
        if self.documents.contains_key(path) {
            return Err(GraphError::DuplicateDocument(path.to_string()));
        }
        let id = FileId::new(self.documents.len() as u32);
        let path: Arc<str> = Arc::from(path);
        let document = Document::new(id, path.clone(), kind, Arc::from(text));
        self.documents.insert(path, document);
        Ok(id)
    }

    pub fn add_element(&mut self, element: ElementDecl) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn add_behavior(&mut self, behavior: BehaviorDecl) -> &mut Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn add_occurrence(&mut self, occurrence: OccurrenceDecl) -> &mut Self {
        self.occurrences.push(occurrence);
        self
    }

    /// Validate, link and freeze the snapshot.
    pub fn build(self) -> Result<FeatureGraph, GraphError> {
        let FeatureGraphBuilder {
            version,
            documents,
            mut elements,
            mut behaviors,
            occurrences,
        } = self;

        let file_count = documents.len();
        let mut graph = FeatureGraph {
            version,
            documents,
            features_by_file: vec![Vec::new(); file_count],
            occurrences_by_file: vec![Vec::new(); file_count],
            ..FeatureGraph::default()
        };

        // First declaration in analysis order wins a name.
        elements.sort_by_key(|decl| (decl.range.file, decl.range.range.start()));
        behaviors.sort_by_key(|decl| (decl.range.file, decl.range.range.start()));

        for decl in elements {
            add_element(&mut graph, decl)?;
        }
        for decl in behaviors {
            add_behavior(&mut graph, decl)?;
        }
        for decl in occurrences {
            if decl.kind == OccurrenceKind::Registration {
                return Err(GraphError::UnexpectedRegistration(decl.host));
            }
            check_range(&graph, &decl.name_range)?;
            check_range(&graph, &decl.range)?;
            graph.occurrences.push(Occurrence {
                kind: decl.kind,
                host: decl.host,
                name: decl.name,
                name_range: decl.name_range,
                range: decl.range,
                target: None,
            });
        }

        link_occurrences(&mut graph);
        index_by_file(&mut graph);

        tracing::debug!(
            "built feature graph v{}: {} documents, {} features, {} occurrences",
            graph.version,
            graph.documents.len(),
            graph.features.len(),
            graph.occurrences.len()
        );
        Ok(graph)
    }
}

fn check_range(graph: &FeatureGraph, range: &SourceRange) -> Result<(), GraphError> {
    let (path, document) = graph
        .documents
        .get_index(range.file.index())
        .ok_or(GraphError::UnknownFile(range.file))?;
    if document.line_index.contains_range(range.range) {
        Ok(())
    } else {
        Err(GraphError::RangeOutOfBounds {
            path: path.to_string(),
            start: range.range.start().into(),
            end: range.range.end().into(),
            len: document.line_index.len().into(),
        })
    }
}

fn push_feature(
    graph: &mut FeatureGraph,
    kind: FeatureKind,
    name: SmolStr,
    range: SourceRange,
    owner: Option<FeatureId>,
    detail: Option<SmolStr>,
) -> Result<FeatureId, GraphError> {
    check_range(graph, &range)?;
    let id = FeatureId(graph.features.len() as u32);
    graph.features.push(Feature {
        id,
        kind,
        name,
        range,
        mixes_in: Vec::new(),
        properties: Vec::new(),
        owner,
        detail,
    });
    Ok(id)
}

fn add_properties(
    graph: &mut FeatureGraph,
    owner: FeatureId,
    properties: Vec<PropertyDecl>,
) -> Result<(), GraphError> {
    let mut ids = Vec::with_capacity(properties.len());
    for property in properties {
        ids.push(push_feature(
            graph,
            FeatureKind::Property,
            property.name,
            property.range,
            Some(owner),
            property.type_name,
        )?);
    }
    // Declaration order is source order.
    ids.sort_by_key(|&id| {
        let range = graph.feature(id).range;
        (range.file, range.range.start())
    });
    graph.features[owner.index()].properties = ids;
    Ok(())
}

fn add_element(graph: &mut FeatureGraph, decl: ElementDecl) -> Result<(), GraphError> {
    let registration = decl.registration.unwrap_or(decl.range);
    check_range(graph, &registration)?;

    let id = push_feature(
        graph,
        FeatureKind::Element,
        decl.name.clone(),
        decl.range,
        None,
        decl.class_name,
    )?;
    graph.features[id.index()].mixes_in = decl.mixes_in;
    add_properties(graph, id, decl.properties)?;

    if graph.elements.contains_key(&decl.name) {
        tracing::warn!(
            "element '{}' is declared more than once; keeping the first declaration",
            decl.name
        );
    } else {
        graph.elements.insert(decl.name.clone(), id);
    }

    graph.occurrences.push(Occurrence {
        kind: OccurrenceKind::Registration,
        host: decl.name.clone(),
        name: decl.name,
        name_range: registration,
        range: registration,
        target: Some(id),
    });
    Ok(())
}

fn add_behavior(graph: &mut FeatureGraph, decl: BehaviorDecl) -> Result<(), GraphError> {
    let id = push_feature(
        graph,
        FeatureKind::Behavior,
        decl.name.clone(),
        decl.range,
        None,
        None,
    )?;
    graph.features[id.index()].mixes_in = decl.mixes_in;
    add_properties(graph, id, decl.properties)?;

    if graph.behaviors.contains_key(&decl.name) {
        tracing::warn!(
            "behavior '{}' is declared more than once; keeping the first declaration",
            decl.name
        );
    } else {
        graph.behaviors.insert(decl.name, id);
    }
    Ok(())
}

/// Resolve each occurrence to the feature it denotes.
fn link_occurrences(graph: &mut FeatureGraph) {
    let targets: Vec<Option<FeatureId>> = graph
        .occurrences
        .iter()
        .map(|occurrence| match occurrence.kind {
            OccurrenceKind::Registration => occurrence.target,
            OccurrenceKind::Tag => graph.element_id(&occurrence.host),
            OccurrenceKind::Attribute => {
                graph.property_for_attribute(&occurrence.host, &occurrence.name)
            }
            OccurrenceKind::Databinding => binding_root(&occurrence.name)
                .and_then(|root| graph.property_of_element(&occurrence.host, root)),
        })
        .collect();

    for (occurrence, target) in graph.occurrences.iter_mut().zip(targets) {
        occurrence.target = target;
    }
}

fn index_by_file(graph: &mut FeatureGraph) {
    for feature in &graph.features {
        graph.features_by_file[feature.range.file.index()].push(feature.id);
    }
    for ids in &mut graph.features_by_file {
        ids.sort_by_key(|&id| (graph.features[id.index()].range.range.start(), id));
    }

    let mut by_target: rustc_hash::FxHashMap<FeatureId, Vec<OccurrenceIdx>> = Default::default();
    for (idx, occurrence) in graph.occurrences.iter().enumerate() {
        graph.occurrences_by_file[occurrence.name_range.file.index()].push(idx);
        if let Some(target) = occurrence.target {
            by_target.entry(target).or_default().push(idx);
        }
    }

    let occurrences = &graph.occurrences;
    for indices in &mut graph.occurrences_by_file {
        indices.sort_by_key(|&idx| (occurrences[idx].name_range.range.start(), idx));
    }

    let documents = &graph.documents;
    let sort_key = |idx: OccurrenceIdx| {
        let occurrence = &occurrences[idx];
        let path = documents
            .get_index(occurrence.range.file.index())
            .map(|(path, _)| path.clone());
        (
            path,
            occurrence.range.range.start(),
            occurrence.name_range.range.start(),
        )
    };
    for indices in by_target.values_mut() {
        indices.sort_by_cached_key(|&idx| sort_key(idx));
    }
    graph.occurrences_by_target = by_target;
}
