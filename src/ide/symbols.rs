//! Symbol listing for workspace and document views.

use smol_str::SmolStr;

use crate::base::{FileId, Result};
use crate::hir::{Feature, FeatureGraph, FeatureKind, Scope};

use super::Location;

/// A symbol for the workspace symbol list or document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SymbolInfo {
    /// Tag name or property identifier.
    pub name: SmolStr,
    /// Element or property.
    pub kind: FeatureKind,
    /// Class name of a class-declared element, value type of a property.
    pub detail: Option<SmolStr>,
    /// The declaring range.
    pub location: Location,
    /// Owned properties of an element. Empty for workspace symbols.
    pub children: Vec<SymbolInfo>,
}

impl SymbolInfo {
    /// Create from a feature, without children.
    pub fn from_feature(graph: &FeatureGraph, feature: &Feature) -> Result<Self> {
        Ok(Self {
            name: feature.name.clone(),
            kind: feature.kind,
            detail: feature.detail.clone(),
            location: Location::from_range(graph, &feature.range)?,
            children: Vec::new(),
        })
    }
}

/// Get declared elements whose tag name contains `query`.
///
/// # Arguments
/// * `query` - Case-sensitive substring; empty matches every element
/// * `limit` - Maximum number of results, `None` for all
///
/// # Returns
/// Matching elements in document analysis order, then declaration offset.
pub fn workspace_symbols(
    graph: &FeatureGraph,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<SymbolInfo>> {
    let symbols = graph
        .all_features(Scope::Workspace)?
        .into_iter()
        .filter(|feature| feature.is_element() && feature.name.contains(query))
        .take(limit.unwrap_or(usize::MAX))
        .map(|feature| SymbolInfo::from_feature(graph, feature))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("{} workspace symbols for {:?}", symbols.len(), query);
    Ok(symbols)
}

/// Get the elements declared in `file`, each with its own properties as
/// children, in declaration order.
pub fn document_symbols(graph: &FeatureGraph, file: FileId) -> Result<Vec<SymbolInfo>> {
    graph
        .all_features(Scope::Document(file))?
        .into_iter()
        .filter(|feature| feature.is_element())
        .map(|element| {
            let mut symbol = SymbolInfo::from_feature(graph, element)?;
            symbol.children = element
                .properties
                .iter()
                .map(|&id| SymbolInfo::from_feature(graph, graph.feature(id)))
                .collect::<Result<_>>()?;
            Ok(symbol)
        })
        .collect()
}
