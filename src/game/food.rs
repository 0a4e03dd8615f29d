use std::collections::HashSet;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Board, Coord};

/// Draws food positions from an injected random source.
///
/// Placement is rejection sampling: pick a uniformly random cell and try
/// again while it's occupied. Seed the source to make a game reproducible.
#[derive(Clone, Debug)]
pub struct FoodPlacer<R> {
    rng: R,
}

impl<R: Rng> FoodPlacer<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a free cell, or `None` once `occupied` covers the whole board.
    pub fn place(
        &mut self,
        board: &Board,
        occupied: &HashSet<Coord>,
    ) -> Option<Coord> {
        let taken = occupied.iter().filter(|c| board.contains(**c)).count();
        if taken >= board.capacity() {
            return None;
        }

        let mut draws = 0_u64;
        loop {
            draws += 1;
            let candidate = Coord {
                x: self.rng.gen_range(0..board.width()),
                y: self.rng.gen_range(0..board.height()),
            };
            if !occupied.contains(&candidate) {
                debug!("placed food at {candidate} after {draws} draw(s)");
                return Some(candidate);
            }
        }
    }
}

impl FoodPlacer<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_lands_on_occupied_cells() {
        let board = Board::new(4, 4).unwrap();
        let occupied: HashSet<_> =
            board.cells().filter(|c| c.x != 2 || c.y != 3).collect();

        let mut placer = FoodPlacer::seeded(7);
        for _ in 0..50 {
            assert_eq!(placer.place(&board, &occupied), Some(Coord::new(2, 3)));
        }
    }

    #[test]
    fn stays_on_the_board() {
        let board = Board::new(5, 3).unwrap();
        let mut placer = FoodPlacer::seeded(1);
        for _ in 0..200 {
            let food = placer.place(&board, &HashSet::new()).unwrap();
            assert!(board.contains(food));
        }
    }

    #[test]
    fn full_board_has_no_room() {
        let board = Board::new(3, 1).unwrap();
        let occupied: HashSet<_> = board.cells().collect();
        assert_eq!(FoodPlacer::seeded(0).place(&board, &occupied), None);
    }

    #[test]
    fn off_board_cells_do_not_count_as_taken() {
        let board = Board::new(3, 1).unwrap();
        let occupied: HashSet<_> = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(-1, 0),
            Coord::new(7, 7),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            FoodPlacer::seeded(3).place(&board, &occupied),
            Some(Coord::new(2, 0))
        );
    }

    #[test]
    fn same_seed_same_food() {
        let board = Board::default();
        let occupied = HashSet::new();
        let mut a = FoodPlacer::seeded(42);
        let mut b = FoodPlacer::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.place(&board, &occupied), b.place(&board, &occupied));
        }
    }
}
