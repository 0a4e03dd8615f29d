use std::fmt;

use itertools::Itertools;

use super::state::GameState;
use crate::grid::{Board, Color, Coord};

/// A colour for every cell of the board, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    board:  Board,
    pixels: Vec<Color>,
}

impl Frame {
    #[must_use]
    pub fn blank(board: Board) -> Self {
        Self {
            board,
            pixels: vec![Color::Black; board.capacity()],
        }
    }

    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.board.index(coord).map(|idx| self.pixels[idx])
    }

    /// Off-board cells are ignored.
    pub fn set(&mut self, coord: Coord, color: Color) {
        if let Some(idx) = self.board.index(coord) {
            self.pixels[idx] = color;
        }
    }

    /// Cells that aren't black.
    pub fn lit(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.board
            .cells()
            .zip(self.pixels.iter().copied())
            .filter(|(_, color)| *color != Color::Black)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.board.width() as usize;
        let rows = self
            .pixels
            .chunks(width)
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .join("\n");
        writeln!(f, "{rows}")
    }
}

/// Calls `set_color` once for every cell that isn't black.
///
/// Snake cells are white and the food is red. Should the food ever sit on
/// the snake, the snake colour wins.
pub fn draw(state: &GameState, mut set_color: impl FnMut(Coord, Color)) {
    if !state.snake.contains(&state.food) {
        set_color(state.food, Color::Red);
    }
    for segment in &state.snake {
        set_color(*segment, Color::White);
    }
}

#[must_use]
pub fn render(state: &GameState) -> Frame {
    let mut frame = Frame::blank(state.board);
    draw(state, |coord, color| frame.set(coord, color));
    frame
}
