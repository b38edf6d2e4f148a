use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which unrevealed cells the player has marked as mines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagState {
    flagged: Array2<bool>,
}

impl FlagState {
    pub fn new(size: Coord) -> Self {
        Self {
            flagged: Array2::default(square_shape(size)),
        }
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged[coords.to_nd_index()]
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.iter().filter(|&&flagged| flagged).count()
    }

    pub fn iter_flagged(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.flagged
            .indexed_iter()
            .filter(|&(_, &flagged)| flagged)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    fn size(&self) -> Coord {
        self.flagged.nrows() as Coord
    }

    /// Flips the flag at `coords` and returns the new value.
    pub(crate) fn flip(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.flagged[coords.to_nd_index()];
        *cell = !*cell;
        *cell
    }
}

/// Toggles the flag at `coords` under the flag budget.
///
/// Revealed cells can't be flagged, and a new flag is refused while `flags_remaining` is zero;
/// both cases hand back unchanged copies.
pub fn toggle_flag(
    flagged: &FlagState,
    flags_remaining: CellCount,
    revealed: &RevealState,
    coords: Coord2,
) -> Result<(FlagState, CellCount)> {
    if !in_bounds(coords, flagged.size()) {
        return Err(GameError::InvalidCoords);
    }

    let mut next = flagged.clone();
    if revealed.is_revealed(coords) {
        return Ok((next, flags_remaining));
    }

    if !next.is_flagged(coords) && flags_remaining == 0 {
        log::debug!("No flags left, ignoring flag at {:?}", coords);
        return Ok((next, flags_remaining));
    }

    let remaining = if next.flip(coords) {
        flags_remaining - 1
    } else {
        flags_remaining.saturating_add(1)
    };
    Ok((next, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_and_unflag_move_the_budget() {
        let revealed = RevealState::new(3);

        let (flags, remaining) = toggle_flag(&FlagState::new(3), 2, &revealed, (1, 1)).unwrap();
        assert!(flags.is_flagged((1, 1)));
        assert_eq!(remaining, 1);

        let (flags, remaining) = toggle_flag(&flags, remaining, &revealed, (1, 1)).unwrap();
        assert!(!flags.is_flagged((1, 1)));
        assert_eq!(remaining, 2);
    }

    #[test]
    fn empty_budget_refuses_new_flags_but_allows_removal() {
        let revealed = RevealState::new(3);
        let (flags, remaining) = toggle_flag(&FlagState::new(3), 1, &revealed, (0, 0)).unwrap();
        assert_eq!(remaining, 0);

        let (refused, still) = toggle_flag(&flags, remaining, &revealed, (2, 2)).unwrap();
        assert_eq!(refused, flags);
        assert_eq!(still, 0);

        let (cleared, remaining) = toggle_flag(&flags, remaining, &revealed, (0, 0)).unwrap();
        assert_eq!(cleared.flagged_count(), 0);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn revealed_cell_cannot_be_flagged() {
        let board = Board::from_mine_coords(3, &[(0, 0)]).unwrap();
        let flags = FlagState::new(3);
        let revealed = reveal(&board, &RevealState::new(3), &flags, (1, 1)).unwrap();

        let (next, remaining) = toggle_flag(&flags, 1, &revealed, (1, 1)).unwrap();

        assert_eq!(next, flags);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn clearing_a_flag_saturates_the_budget() {
        let mut flags = FlagState::new(2);
        flags.flip((0, 0));

        let (next, remaining) =
            toggle_flag(&flags, CellCount::MAX, &RevealState::new(2), (0, 0)).unwrap();

        assert!(!next.is_flagged((0, 0)));
        assert_eq!(remaining, CellCount::MAX);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        assert_eq!(
            toggle_flag(&FlagState::new(2), 1, &RevealState::new(2), (2, 2)),
            Err(GameError::InvalidCoords)
        );
    }
}
