use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Derives the outcome of a position.
///
/// Any revealed mine loses. Otherwise the game is won once the whole flag budget is spent and
/// every flag sits on a mine.
pub fn evaluate(board: &Board, revealed: &RevealState, flagged: &FlagState) -> GameOutcome {
    if board.mine_coords().any(|coords| revealed.is_revealed(coords)) {
        return GameOutcome::Lost;
    }

    let budget_spent = flagged.flagged_count() == usize::from(board.mine_count());
    if budget_spent && flagged.iter_flagged().all(|coords| board.contains_mine(coords)) {
        GameOutcome::Won
    } else {
        GameOutcome::InProgress
    }
}
