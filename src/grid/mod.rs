pub mod board;
pub mod types;
pub mod utils;

pub use board::{Board, HEIGHT, MAX_CELLS, WIDTH};
pub use types::{Color, Coord, Direction};
