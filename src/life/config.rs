use serde::{Deserialize, Serialize};

/// Configuration for a life board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// When set, neighbours past the edge are not counted; otherwise the
    /// board is a torus
    pub boundaries: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            boundaries: false,
        }
    }
}

impl LifeConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_boundaries(mut self, boundaries: bool) -> Self {
        self.boundaries = boundaries;
        self
    }
}
