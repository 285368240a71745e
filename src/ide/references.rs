//! Find references implementation.

use text_size::TextSize;

use crate::base::{FileId, Result};
use crate::hir::{FeatureGraph, FeatureId, OccurrenceKind, SourceRange};

use super::classify::classify;

/// A reference to a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    /// The reported range: the whole element for tags, the expression for
    /// registrations, the token otherwise.
    pub range: SourceRange,
    /// The syntactic form of the use site.
    pub kind: OccurrenceKind,
}

impl Reference {
    /// Whether this is the element's registration rather than a use.
    pub fn is_declaration(&self) -> bool {
        self.kind == OccurrenceKind::Registration
    }
}

/// Find all references to the feature under `offset`.
///
/// The target is chosen exactly as [`goto_definition`](super::goto_definition)
/// would, except that a registration site targets its own element. Results
/// are ordered by (document path, start offset).
///
/// # Arguments
/// * `include_declaration` - Also report element registrations, at their
///   position in document order. Properties never report their declaration.
pub fn find_references(
    graph: &FeatureGraph,
    file: FileId,
    offset: TextSize,
    include_declaration: bool,
) -> Result<Vec<Reference>> {
    let context = classify(graph, file, offset)?;
    let Some(target) = context.target(graph) else {
        tracing::debug!("no reference target for {:?}", context);
        return Ok(Vec::new());
    };

    let references = references_to(graph, target, include_declaration);
    tracing::debug!(
        "{} references to '{}' (include_declaration: {})",
        references.len(),
        graph.feature(target).name,
        include_declaration
    );
    Ok(references)
}

/// Range-only form of [`find_references`].
pub fn resolve_references(
    graph: &FeatureGraph,
    file: FileId,
    offset: TextSize,
    include_declaration: bool,
) -> Result<Vec<SourceRange>> {
    Ok(find_references(graph, file, offset, include_declaration)?
        .into_iter()
        .map(|reference| reference.range)
        .collect())
}

/// Every use of `target`, in the graph's deterministic occurrence order.
pub(crate) fn references_to(
    graph: &FeatureGraph,
    target: FeatureId,
    include_declaration: bool,
) -> Vec<Reference> {
    let mut references: Vec<Reference> = graph
        .occurrences_of(target)
        .into_iter()
        .filter(|occurrence| {
            include_declaration || occurrence.kind != OccurrenceKind::Registration
        })
        .map(|occurrence| Reference {
            range: occurrence.range,
            kind: occurrence.kind,
        })
        .collect();

    // An occurrence reported twice by the analyzer is one reference.
    references.dedup_by_key(|reference| reference.range);
    references
}
