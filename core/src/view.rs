use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of one cell, the tag a UI picks its rendering from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellView {
    Hidden,
    Flagged,
    Mine,
    Number { count: u8 },
}

impl CellView {
    pub const fn derive(cell: Cell, revealed: bool, flagged: bool) -> Self {
        match (revealed, flagged, cell) {
            (false, true, _) => Self::Flagged,
            (false, false, _) => Self::Hidden,
            (true, _, Cell::Mine) => Self::Mine,
            (true, _, Cell::Count(count)) => Self::Number { count },
        }
    }

    /// Single-character glyph for text front-ends; zero counts render blank.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Mine => '*',
            Self::Number { count: 0 } => ' ',
            Self::Number { count } => (b'0' + count) as char,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Snapshot of everything a UI needs to draw a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub size: Coord,
    pub flags_remaining: CellCount,
    pub outcome: GameOutcome,
    pub cells: Array2<CellView>,
}

impl SessionView {
    pub fn from_session(session: &GameSession) -> Self {
        let size = session.size();
        let cells = Array2::from_shape_fn(square_shape(size), |(row, col)| {
            session.cell_view((row as Coord, col as Coord))
        });

        Self {
            size,
            flags_remaining: session.flags_remaining(),
            outcome: session.outcome(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}
