//! Navigation options

/// Options for the navigation queries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationConfig {
    /// Maximum number of workspace symbols returned (`None` = unlimited)
    pub workspace_symbol_limit: Option<usize>,
}

impl NavigationConfig {
    /// Cap workspace symbol results at `limit` entries
    pub fn with_workspace_symbol_limit(mut self, limit: usize) -> Self {
        self.workspace_symbol_limit = Some(limit);
        self
    }
}
