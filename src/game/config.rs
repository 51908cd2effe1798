use serde::{Deserialize, Serialize};

/// Configuration for a snake board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// When set, leaving the board ends the game instead of wrapping
    pub boundaries: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            boundaries: false,
        }
    }
}

impl SnakeConfig {
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
