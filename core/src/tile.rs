use serde::{Deserialize, Serialize};

/// Hidden content of a board cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Number of mines among the up-to-8 neighbors.
    Count(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Zero-count cells propagate a cascade reveal.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Count(0)
    }
}
