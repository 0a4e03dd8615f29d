use color_eyre::{eyre::bail, Result};
use serde::Serialize;

use super::types::Coord;

pub const WIDTH: i64 = 40;
pub const HEIGHT: i64 = 40;

/// Largest board a frame will be allocated for.
pub const MAX_CELLS: i64 = 1 << 20;

/// Grid dimensions shared between the engine and whatever paints it.
///
/// Always has room for the two-cell starting snake plus one food cell.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width:  i64,
    height: i64,
}

impl Board {
    /// # Errors
    ///
    /// Fails if the grid can't hold the starting snake and its food, or has
    /// more than [`MAX_CELLS`] cells.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width < 2 || height < 1 {
            bail!(
                "a {width}x{height} board is too small for a snake and its \
                 food"
            );
        }
        match width.checked_mul(height) {
            Some(cells) if cells < 3 => bail!(
                "a {width}x{height} board is too small for a snake and its \
                 food"
            ),
            Some(cells) if cells <= MAX_CELLS => Ok(Self { width, height }),
            _ => bail!(
                "a {width}x{height} board has more than {MAX_CELLS} cells"
            ),
        }
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Row-major index of `coord`, or `None` if it's off the board.
    #[must_use]
    pub const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Coord { x, y }))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width:  WIDTH,
            height: HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_tiny_boards() {
        assert!(Board::new(1, 10).is_err());
        assert!(Board::new(10, 0).is_err());
        assert!(Board::new(2, 1).is_err());
        assert!(Board::new(3, 1).is_ok());
        assert!(Board::new(2, 2).is_ok());
    }

    #[test]
    fn rejects_huge_boards() {
        assert!(Board::new(i64::MAX, 2).is_err());
        assert!(Board::new(2, i64::MAX).is_err());
        assert!(Board::new(3_000_000, 3_000_000).is_err());
        assert!(Board::new(MAX_CELLS + 1, 1).is_err());
        assert!(Board::new(1024, 1024).is_ok());
        assert_eq!(Board::new(1024, 1024).unwrap().capacity(), 1 << 20);
    }

    #[test]
    fn contains_is_half_open() {
        let board = Board::new(10, 10).unwrap();
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(9, 9)));
        assert!(!board.contains(Coord::new(-1, 5)));
        assert!(!board.contains(Coord::new(10, 5)));
        assert!(!board.contains(Coord::new(5, 10)));
    }

    #[test]
    fn cells_cover_the_board_in_row_order() {
        let board = Board::new(3, 2).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), board.capacity());
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[3], Coord::new(0, 1));
        for (i, c) in cells.iter().enumerate() {
            assert_eq!(board.index(*c), Some(i));
        }
    }
}
