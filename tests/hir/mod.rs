//! Feature graph tests
//!
//! Tests for:
//! - Line/column mapping
//! - Effective property sets
//! - Snapshot construction and accessors

pub mod tests_effective;
pub mod tests_line_index;
