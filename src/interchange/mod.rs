//! Snapshot interchange for feature graphs.
//!
//! An analyzer running in another process describes its result as JSON; this
//! module turns that description into a [`FeatureGraph`] and back.
//!
//! ```text
//! ┌──────────────────────┐   from_json    ┌──────────────────┐
//! │ SnapshotDescription  │ ─────────────▶ │   FeatureGraph   │
//! │  (serde, JSON)       │ ◀───────────── │   (immutable)    │
//! └──────────────────────┘    to_json     └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use polynav::interchange::from_json;
//!
//! let graph = from_json(&std::fs::read_to_string("snapshot.json")?)?;
//! host.set_graph(graph);
//! ```

mod description;
mod error;

pub use description::{
    BehaviorDescription, DocumentDescription, ElementDescription, OccurrenceDescription,
    PropertyDescription, RangeDescription, SnapshotDescription,
};
pub use error::InterchangeError;

use crate::hir::FeatureGraph;

/// Parse a JSON snapshot description and build the graph.
pub fn from_json(input: &str) -> Result<FeatureGraph, InterchangeError> {
    let description: SnapshotDescription =
        serde_json::from_str(input).map_err(|e| InterchangeError::json(e.to_string()))?;
    tracing::debug!(
        "loading snapshot v{} with {} documents",
        description.version,
        description.documents.len()
    );
    description.into_graph()
}

/// Write a graph as a pretty-printed JSON snapshot description.
pub fn to_json(graph: &FeatureGraph) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(&SnapshotDescription::from_graph(graph))
        .map_err(|e| InterchangeError::json(e.to_string()))
}
