use std::fmt;

use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use super::{food::FoodPlacer, state::GameState};
use crate::grid::Direction;

/// Why a game ended.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Cause {
    OutOfBounds,
    SelfCollision,
    /// The snake grew into the last free cell, so no food can be placed.
    BoardFilled,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cause::OutOfBounds => "out of bounds",
                Cause::SelfCollision => "ran into itself",
                Cause::BoardFilled => "filled the board",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Continuing(GameState),
    GameOver(Cause),
}

impl TickOutcome {
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::GameOver(_))
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        match self {
            TickOutcome::Continuing(state) => Some(state),
            TickOutcome::GameOver(_) => None,
        }
    }
}

/// The heading after `pressed`: anything but a straight reversal is taken.
#[must_use]
pub fn resolve_direction(current: Direction, pressed: Direction) -> Direction {
    if pressed == current.opposite() {
        trace!("ignoring {pressed}, the snake is heading {current}");
        current
    } else {
        pressed
    }
}

/// Advances the game by one tick.
///
/// The head moves one cell in the resolved direction. Landing on food grows
/// the snake by keeping its tail; otherwise the tail cell is dropped. Bounds
/// and self-collision are judged against the body after that move, so the
/// head may follow the tail into the cell it has just left.
pub fn step<R: Rng>(
    state: &GameState,
    pressed_key: Direction,
    placer: &mut FoodPlacer<R>,
) -> TickOutcome {
    let direction = resolve_direction(state.direction, pressed_key);
    let head = state.head().neighbour(direction);
    let grows = head == state.food;

    let mut snake = state.snake.clone();
    snake.push_front(head);
    if !grows {
        snake.pop_back();
    }

    if !state.board.contains(head) {
        trace!("head left the board at {head}");
        return TickOutcome::GameOver(Cause::OutOfBounds);
    }

    if snake.iter().skip(1).any(|c| *c == head) {
        trace!("head hit the body at {head}");
        return TickOutcome::GameOver(Cause::SelfCollision);
    }

    let mut next = GameState {
        snake,
        food: state.food,
        direction,
        board: state.board,
    };

    if grows {
        debug!("ate food at {head}, length is now {}", next.len());
        match placer.place(&next.board, &next.occupied()) {
            Some(food) => next.food = food,
            None => return TickOutcome::GameOver(Cause::BoardFilled),
        }
    }

    trace!("moved {direction} to {head}");

    TickOutcome::Continuing(next)
}

impl GameState {
    pub fn step<R: Rng>(
        &self,
        pressed_key: Direction,
        placer: &mut FoodPlacer<R>,
    ) -> TickOutcome {
        step(self, pressed_key, placer)
    }
}
