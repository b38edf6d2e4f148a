use rand::prelude::*;

use super::*;

/// Uniform picker backed by a seeded small RNG, so a game can be replayed from its seed.
#[derive(Clone, Debug)]
pub struct RandomCellPicker {
    rng: SmallRng,
}

impl RandomCellPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl CellPicker for RandomCellPicker {
    fn pick(&mut self, size: Coord) -> Coord2 {
        let row = self.rng.random_range(0..size);
        let col = self.rng.random_range(0..size);
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_draws_the_same_cells() {
        let mut a = RandomCellPicker::new(42);
        let mut b = RandomCellPicker::new(42);
        for _ in 0..100 {
            assert_eq!(a.pick(9), b.pick(9));
        }
    }

    #[test]
    fn draws_stay_on_the_board() {
        let mut picker = RandomCellPicker::new(123);
        for _ in 0..1000 {
            assert!(in_bounds(picker.pick(5), 5));
        }
    }
}
