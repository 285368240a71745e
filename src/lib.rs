//! # polymer-nav-base
//!
//! Core library for navigating custom-element projects: go-to-definition,
//! find-references and symbol listings over an analyzed feature graph.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → Navigation queries (classify, goto-def, references, symbols)
//!   ↓
//! hir          → Feature graph snapshot, effective properties, naming rules
//!   ↓
//! base         → Primitives (FileId, LineIndex, Position/Span, Error)
//! ```
//!
//! `interchange` (feature-gated) loads and writes graph snapshots as JSON.

// ============================================================================
// MODULES (dependency order: base → hir → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, Position/Span, errors
pub mod base;

/// High-level IR: the immutable feature graph
pub mod hir;

/// Navigation features: classify, goto-definition, find-references, symbols
pub mod ide;

/// Snapshot interchange: JSON description of a feature graph
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{Error, FileId, LineIndex, Position, Result, Span, TextRange, TextSize};

// Re-export the main entry points
pub use hir::{FeatureGraph, FeatureGraphBuilder};
pub use ide::{Analysis, AnalysisHost, Location, NavigationConfig, SymbolInfo};
