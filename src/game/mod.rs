pub mod food;
pub mod render;
pub mod state;
pub mod tick;

pub use food::FoodPlacer;
pub use render::{draw, render, Frame};
pub use state::GameState;
pub use tick::{step, Cause, TickOutcome};
