//! High-level IR (HIR): the feature graph.
//!
//! This module holds the component graph produced by the analyzer: documents,
//! declared features (elements, behaviors, properties) and their occurrences.
//! A [`FeatureGraph`] is an immutable snapshot; every navigation query
//! reads exactly one of them.
//!
//! ## Key Types
//!
//! - [`FeatureGraph`]: Snapshot with the read-only query surface
//! - [`FeatureGraphBuilder`]: Assembles a snapshot from analyzer output
//! - [`Feature`]: A declared element, behavior or property
//! - [`Occurrence`]: A use site linked to the feature it denotes
//! - [`Document`]: Source text plus its line index
//!
//! ## Layers
//!
//! ```text
//! analyzer output (documents, decls, occurrences)
//!     │
//!     ▼
//! FeatureGraphBuilder::build   ← validate ranges, link occurrences
//!     │
//!     ▼
//! FeatureGraph                 ← lookups, occurrences_of, effective properties
//! ```

mod builder;
mod document;
mod effective;
mod features;
mod graph;
pub mod naming;

pub use builder::{FeatureGraphBuilder, GraphError};
pub use document::{Document, DocumentKind};
pub use effective::PropertyMap;
pub use features::{
    BehaviorDecl, ElementDecl, Feature, FeatureId, FeatureKind, Occurrence, OccurrenceDecl,
    OccurrenceKind, PropertyDecl, SourceRange,
};
pub use graph::{FeatureGraph, Scope};
