//! Go-to-definition implementation.

use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::{FileId, Result};
use crate::hir::{Feature, FeatureGraph, FeatureKind, SourceRange};

use super::classify::{Context, classify};

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The declaring range of the target feature.
    pub range: SourceRange,
    /// The feature kind.
    pub kind: FeatureKind,
    /// The feature name.
    pub name: SmolStr,
}

impl From<&Feature> for GotoTarget {
    fn from(feature: &Feature) -> Self {
        Self {
            range: feature.range,
            kind: feature.kind,
            name: feature.name.clone(),
        }
    }
}

/// Find the declaration of whatever is under `offset`.
///
/// - a tag resolves to its element's declaration (for factory-registered
///   elements, the whole factory call)
/// - an attribute or binding resolves to the property in the host element's
///   effective property set, possibly in another document
/// - registration sites and unclassified offsets resolve to nothing
///
/// # Returns
/// `Ok(None)` on a resolution miss; `Err` only for an unknown document or an
/// offset past its end.
pub fn goto_definition(
    graph: &FeatureGraph,
    file: FileId,
    offset: TextSize,
) -> Result<Option<GotoTarget>> {
    let context = classify(graph, file, offset)?;

    let target = match &context {
        Context::RegistrationSite { .. } | Context::None => None,
        _ => context.target(graph),
    };

    match target {
        Some(id) => {
            let feature = graph.feature(id);
            tracing::debug!(
                "definition of {} '{}' at {:?}",
                feature.kind.display(),
                feature.name,
                feature.range
            );
            Ok(Some(GotoTarget::from(feature)))
        }
        None => {
            tracing::debug!("no definition for {:?}", context);
            Ok(None)
        }
    }
}

/// The declaring range only; see [`goto_definition`].
pub fn resolve_definition(
    graph: &FeatureGraph,
    file: FileId,
    offset: TextSize,
) -> Result<Option<SourceRange>> {
    Ok(goto_definition(graph, file, offset)?.map(|target| target.range))
}
