use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which cells the player has uncovered. Cells are only ever set, never cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    revealed: Array2<bool>,
}

impl RevealState {
    pub fn new(size: Coord) -> Self {
        Self {
            revealed: Array2::default(square_shape(size)),
        }
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&revealed| revealed).count()
    }

    /// Iterates revealed coordinates in row-major order.
    pub fn iter_revealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.revealed
            .indexed_iter()
            .filter(|&(_, &revealed)| revealed)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    fn mark(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
    }
}

/// Reveals `coords`, cascading over the zero-count region it belongs to.
///
/// Returns the updated reveal state; `revealed` is left untouched. Revealing an
/// already revealed or flagged cell gives back an identical copy.
pub fn reveal(
    board: &Board,
    revealed: &RevealState,
    flagged: &FlagState,
    coords: Coord2,
) -> Result<RevealState> {
    let coords = board.validate_coords(coords)?;
    let mut next = revealed.clone();

    if next.is_revealed(coords) || flagged.is_flagged(coords) {
        return Ok(next);
    }

    next.mark(coords);
    if !board[coords].is_open() {
        return Ok(next);
    }

    // cells are marked when queued, so each one enters the worklist at most once
    let mut to_visit = VecDeque::from([coords]);
    let mut cascaded = 0usize;
    while let Some(open_coords) = to_visit.pop_front() {
        for pos in board.iter_neighbors(open_coords) {
            if next.is_revealed(pos) || flagged.is_flagged(pos) {
                continue;
            }

            // neighbors of a zero-count cell are never mines
            let Cell::Count(count) = board[pos] else {
                continue;
            };

            next.mark(pos);
            cascaded += 1;
            if count == 0 {
                to_visit.push_back(pos);
            }
        }
    }

    log::debug!("Reveal at {:?} cascaded to {} more cells", coords, cascaded);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    fn revealed_cells(state: &RevealState) -> Vec<Coord2> {
        state.iter_revealed().collect()
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let board = board(3, &[(0, 0)]);
        let flags = FlagState::new(3);

        let next = reveal(&board, &RevealState::new(3), &flags, (1, 1)).unwrap();

        assert_eq!(revealed_cells(&next), [(1, 1)]);
    }

    #[test]
    fn mine_reveals_only_itself() {
        let board = board(3, &[(1, 1)]);
        let flags = FlagState::new(3);

        let next = reveal(&board, &RevealState::new(3), &flags, (1, 1)).unwrap();

        assert_eq!(revealed_cells(&next), [(1, 1)]);
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        // a wall of mines down the middle column
        let mines = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let board = board(5, &mines);
        let flags = FlagState::new(5);

        let next = reveal(&board, &RevealState::new(5), &flags, (0, 0)).unwrap();

        let expected: Vec<Coord2> = (0..5).flat_map(|row| [(row, 0), (row, 1)]).collect();
        assert_eq!(revealed_cells(&next), expected);
    }

    #[test]
    fn cascade_leaves_input_untouched() {
        let board = board(3, &[]);
        let flags = FlagState::new(3);
        let before = RevealState::new(3);

        let next = reveal(&board, &before, &flags, (1, 1)).unwrap();

        assert_eq!(before.revealed_count(), 0);
        assert_eq!(next.revealed_count(), 9);
    }

    #[test]
    fn cascade_skips_flagged_cells() {
        let board = board(3, &[]);
        let mut flags = FlagState::new(3);
        flags.flip((2, 2));

        let next = reveal(&board, &RevealState::new(3), &flags, (0, 0)).unwrap();

        assert_eq!(next.revealed_count(), 8);
        assert!(!next.is_revealed((2, 2)));
    }

    #[test]
    fn flagged_target_is_protected() {
        let board = board(3, &[(0, 0)]);
        let mut flags = FlagState::new(3);
        flags.flip((0, 0));

        let next = reveal(&board, &RevealState::new(3), &flags, (0, 0)).unwrap();

        assert_eq!(next.revealed_count(), 0);
    }

    #[test]
    fn repeated_reveal_is_a_no_op() {
        let board = board(4, &[(3, 3)]);
        let flags = FlagState::new(4);

        let once = reveal(&board, &RevealState::new(4), &flags, (0, 0)).unwrap();
        let twice = reveal(&board, &once, &flags, (0, 0)).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let board = board(2, &[]);
        let flags = FlagState::new(2);

        assert_eq!(
            reveal(&board, &RevealState::new(2), &flags, (0, 2)),
            Err(GameError::InvalidCoords)
        );
    }
}
