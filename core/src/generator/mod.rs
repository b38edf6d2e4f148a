use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;
pub use random::*;

mod random;

/// Upper bound of draws per board cell before giving up on a picker.
const MAX_DRAWS_PER_CELL: u32 = 64;

/// Source of candidate mine coordinates.
///
/// Normal play uses [`RandomCellPicker`]; tests and replays can inject any `FnMut(Coord) -> Coord2`.
pub trait CellPicker {
    /// Draws one `(row, col)` on a board with `size` cells per side.
    fn pick(&mut self, size: Coord) -> Coord2;
}

impl<F> CellPicker for F
where
    F: FnMut(Coord) -> Coord2,
{
    fn pick(&mut self, size: Coord) -> Coord2 {
        self(size)
    }
}

/// Places `config.mines` distinct mines drawn from `picker` and derives the adjacency counts.
///
/// Repeated or out-of-bounds draws are rejected and drawn again.
pub fn generate<P: CellPicker + ?Sized>(config: GameConfig, picker: &mut P) -> Result<Board> {
    config.validate()?;

    let wanted = usize::from(config.mines);
    let max_draws = u32::from(config.total_cells()) * MAX_DRAWS_PER_CELL;
    let mut chosen: HashSet<Coord2> = HashSet::with_capacity(wanted);
    let mut draws = 0;

    while chosen.len() < wanted {
        if draws >= max_draws {
            log::warn!(
                "Gave up placing mines after {} draws, placed {} of {}",
                draws,
                chosen.len(),
                wanted
            );
            return Err(GameError::PlacementExhausted);
        }
        draws += 1;

        let coords = picker.pick(config.size);
        if !in_bounds(coords, config.size) {
            log::warn!(
                "Picker drew {:?} outside a {}x{} board, retrying",
                coords,
                config.size,
                config.size
            );
            continue;
        }
        chosen.insert(coords);
    }

    log::debug!(
        "Placed {} mines on a {}x{} board in {} draws",
        wanted,
        config.size,
        config.size,
        draws
    );

    let mine_coords: Vec<Coord2> = chosen.into_iter().collect();
    Board::from_mine_coords(config.size, &mine_coords)
}
