//! Configuration for matrix file I/O

use sparsemat_core::ParseOptions;

/// Configuration for loading and saving matrix files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoConfig {
    /// Reject entries outside the declared shape when loading
    pub check_bounds: bool,
    /// Create missing parent directories when saving
    pub create_dirs: bool,
}

impl IoConfig {
    /// Set whether loaded entries must lie inside the declared shape
    pub fn with_bounds_check(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }

    /// Set whether saving creates missing parent directories
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Parser options derived from this configuration
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().with_bounds_check(self.check_bounds)
    }
}
