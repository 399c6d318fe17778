//! Minimax search parameters.

use serde::{Deserialize, Serialize};

/// Search configuration for the hard tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Hard ply limit. Nodes at this depth score 0.
    /// Must be at least the cell count for the search to reach every terminal.
    pub max_depth: u32,

    /// Largest board (in cells) searched exhaustively.
    /// Bigger surfaces fall back to the medium procedure.
    pub cell_limit: usize,

    /// Base score of a win; a win at depth `d` scores `win_score - d`.
    /// Must exceed `max_depth` so every win outranks a tie.
    pub win_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 9,
            cell_limit: 9,
            win_score: 10,
        }
    }
}

impl SearchConfig {
    /// Set the ply limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the exhaustive-search cell limit.
    #[must_use]
    pub fn with_cell_limit(mut self, cells: usize) -> Self {
        self.cell_limit = cells;
        self
    }
}
