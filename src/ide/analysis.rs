//! AnalysisHost and Analysis: snapshot management for navigation queries.
//!
//! The `AnalysisHost` holds the current feature graph and hands out
//! `Analysis` snapshots for querying. A snapshot keeps the graph it was
//! created from alive, so a query that started before a document change
//! keeps reading the old graph while new queries see the new one.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new();
//!
//! // The analyzer publishes a rebuilt graph after every document change
//! host.set_graph(graph);
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let target = analysis.goto_definition("index.html", Position::new(3, 8))?;
//! let symbols = analysis.workspace_symbols("")?;
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use text_size::TextSize;

use crate::base::{FileId, Position, Result};
use crate::hir::{FeatureGraph, SourceRange};

use super::classify::Context;
use super::{Location, NavigationConfig, SymbolInfo};

/// Owns the current snapshot for the navigation layer.
///
/// Publish new graphs via `set_graph()`, then get a consistent snapshot via
/// `analysis()`. Both take `&self`, so a host can be shared between the
/// thread that publishes graphs and the threads that answer queries.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    current: RwLock<Arc<FeatureGraph>>,
    config: NavigationConfig,
}

impl AnalysisHost {
    /// Create a host holding an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with non-default query options.
    pub fn with_config(config: NavigationConfig) -> Self {
        Self {
            current: RwLock::default(),
            config,
        }
    }

    /// Create a host serving an already built graph.
    pub fn from_graph(graph: FeatureGraph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
            config: NavigationConfig::default(),
        }
    }

    /// Replace the current snapshot. Returns the previous one; analyses
    /// created before the swap keep observing it.
    pub fn set_graph(&self, graph: FeatureGraph) -> Arc<FeatureGraph> {
        let graph = Arc::new(graph);
        tracing::debug!("publishing feature graph v{}", graph.version());
        std::mem::replace(&mut *self.current.write(), graph)
    }

    /// Get a consistent snapshot for querying.
    pub fn analysis(&self) -> Analysis {
        Analysis {
            graph: self.current.read().clone(),
            config: self.config.clone(),
        }
    }

    /// Version of the current snapshot.
    pub fn version(&self) -> u64 {
        self.current.read().version()
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }
}

/// An immutable snapshot of the navigation state.
///
/// All caller-facing queries go through this struct. Positions and locations
/// are zero-based line/column pairs in workspace-relative paths.
#[derive(Clone, Debug)]
pub struct Analysis {
    graph: Arc<FeatureGraph>,
    config: NavigationConfig,
}

impl Analysis {
    // ==================== Navigation ====================

    /// Classify the token at a position.
    pub fn classify(&self, path: &str, position: Position) -> Result<Context> {
        let (file, offset) = self.offset_of(path, position)?;
        super::classify(&self.graph, file, offset)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, path: &str, position: Position) -> Result<Option<Location>> {
        let (file, offset) = self.offset_of(path, position)?;
        super::goto_definition(&self.graph, file, offset)?
            .map(|target| self.location(&target.range))
            .transpose()
    }

    /// Find all references to the feature at a position.
    pub fn find_references(
        &self,
        path: &str,
        position: Position,
        include_declaration: bool,
    ) -> Result<Vec<Location>> {
        let (file, offset) = self.offset_of(path, position)?;
        super::find_references(&self.graph, file, offset, include_declaration)?
            .iter()
            .map(|reference| self.location(&reference.range))
            .collect()
    }

    // ==================== Symbols ====================

    /// Search for elements across the workspace.
    pub fn workspace_symbols(&self, query: &str) -> Result<Vec<SymbolInfo>> {
        super::workspace_symbols(&self.graph, query, self.config.workspace_symbol_limit)
    }

    /// Get the elements declared in a document, with their properties.
    pub fn document_symbols(&self, path: &str) -> Result<Vec<SymbolInfo>> {
        let file = self.graph.document_by_path(path)?.id;
        super::document_symbols(&self.graph, file)
    }

    // ==================== Accessors ====================

    /// The snapshot this analysis reads.
    pub fn graph(&self) -> &FeatureGraph {
        &self.graph
    }

    pub fn version(&self) -> u64 {
        self.graph.version()
    }

    /// Get the FileId for a path.
    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.graph.file_id(path)
    }

    /// Map a position in a document to a character offset.
    pub fn offset_of(&self, path: &str, position: Position) -> Result<(FileId, TextSize)> {
        let document = self.graph.document_by_path(path)?;
        Ok((document.id, document.line_index.to_offset(position)?))
    }

    /// Render a range as a line/column location.
    pub fn location(&self, range: &SourceRange) -> Result<Location> {
        Location::from_range(&self.graph, range)
    }
}
