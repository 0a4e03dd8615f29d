use std::collections::{HashSet, VecDeque};

use rand::Rng;
use serde::Serialize;

use super::food::FoodPlacer;
use crate::grid::{Board, Coord, Direction};

/// One immutable snapshot of the game. Ticks produce new values.
///
/// The snake is stored head first. While the game is live it holds no
/// duplicate cells and never overlaps the food.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub snake:     VecDeque<Coord>,
    pub food:      Coord,
    pub direction: Direction,
    pub board:     Board,
}

impl GameState {
    /// # Panics
    ///
    /// Panics if `snake` is empty.
    pub fn new(
        board: Board,
        snake: impl IntoIterator<Item = Coord>,
        food: Coord,
        direction: Direction,
    ) -> Self {
        let snake: VecDeque<Coord> = snake.into_iter().collect();
        assert!(!snake.is_empty(), "a snake needs a head");
        debug_assert!(!snake.contains(&food), "food placed on the snake");

        Self {
            snake,
            food,
            direction,
            board,
        }
    }

    /// Two cells in the middle of the board heading right, food anywhere
    /// else.
    ///
    /// # Panics
    ///
    /// Never in practice: [`Board::new`] guarantees a free cell beyond the
    /// starting snake.
    pub fn initial<R: Rng>(board: Board, placer: &mut FoodPlacer<R>) -> Self {
        let head = Coord {
            x: board.width() / 2,
            y: board.height() / 2,
        };
        let mut state = Self {
            snake: VecDeque::from([head, head.neighbour(Direction::Left)]),
            food: head,
            direction: Direction::Right,
            board,
        };

        let Some(food) = placer.place(&board, &state.occupied()) else {
            unreachable!("boards always have room beyond the starting snake")
        };
        state.food = food;
        state
    }

    /// # Panics
    ///
    /// Panics on an empty snake, which [`GameState::new`] refuses to build.
    #[must_use]
    pub fn head(&self) -> Coord {
        self.snake[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    #[must_use]
    pub fn occupied(&self) -> HashSet<Coord> {
        self.snake.iter().copied().collect()
    }
}
