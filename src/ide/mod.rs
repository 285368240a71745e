//! IDE features: navigation queries for the editor-protocol layer.
//!
//! This module provides the interface between the feature graph (HIR) and
//! the session layer. Each function corresponds to one navigation request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a snapshot in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the wire boundary
//! 3. **Composable**: Every resolver starts from [`classify`]
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use polynav::ide::AnalysisHost;
//!
//! let host = AnalysisHost::from_graph(graph);
//!
//! let analysis = host.analysis();
//! let symbols = analysis.document_symbols("index.html")?;
//! ```

mod analysis;
mod classify;
mod config;
mod goto;
mod location;
mod references;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use classify::{Context, classify};
pub use config::NavigationConfig;
pub use goto::{GotoTarget, goto_definition, resolve_definition};
pub use location::Location;
pub use references::{Reference, find_references, resolve_references};
pub use symbols::{SymbolInfo, document_symbols, workspace_symbols};
