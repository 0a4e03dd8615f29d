use super::InputSource;
use crate::{
    game::GameState,
    grid::{utils::manhattan_distance, Coord, Direction},
};

/// Greedy player: heads for the food along any move that survives the next
/// tick. Gives no input when every move is fatal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn possible_directions(state: &GameState) -> Vec<Direction> {
        Direction::iter()
            .copied()
            .filter(|d| {
                // filter out our neck
                *d != state.direction.opposite()
                    && is_safe(state, state.head().neighbour(*d))
            })
            .collect()
    }
}

fn is_safe(state: &GameState, next: Coord) -> bool {
    if !state.board.contains(next) {
        return false;
    }
    // the tail moves out of the way unless we're about to eat
    let keep = if next == state.food {
        state.len()
    } else {
        state.len() - 1
    };
    !state.snake.iter().take(keep).any(|c| *c == next)
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Option<Direction> {
        Self::possible_directions(state).into_iter().min_by_key(|d| {
            manhattan_distance(state.head().neighbour(*d), state.food)
        })
    }
}
