use std::io::Write;

use color_eyre::{eyre::WrapErr, Result};
use serde::Serialize;

use super::Screen;
use crate::game::{Cause, Frame, GameState};

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Paints frames as text, redrawing in place.
pub struct TextScreen<W> {
    out:   W,
    clear: bool,
}

impl<W: Write> TextScreen<W> {
    pub const fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Appends frames instead of clearing the terminal between them.
    pub const fn scrolling(out: W) -> Self {
        Self { out, clear: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn paint(&mut self, state: &GameState, frame: &Frame) -> Result<()> {
        if self.clear {
            write!(self.out, "{CLEAR}")?;
        }
        write!(self.out, "{frame}")?;
        writeln!(self.out, "length {}", state.len())?;
        self.out.flush().wrap_err("failed to flush frame")
    }

    fn game_over(&mut self, cause: Cause, last: &GameState) -> Result<()> {
        writeln!(
            self.out,
            "GAME OVER: {cause} at length {} (head {})",
            last.len(),
            last.head()
        )?;
        self.out.flush().wrap_err("failed to flush game over")
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Line<'a> {
    Tick { state: &'a GameState },
    GameOver { cause: Cause, last: &'a GameState },
}

/// Writes each state as a JSON line so runs can be replayed and diffed.
pub struct JsonLines<W> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &Line) -> Result<()> {
        serde_json::to_writer(&mut self.out, line)
            .wrap_err("failed to encode state")?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Screen for JsonLines<W> {
    fn paint(&mut self, state: &GameState, _frame: &Frame) -> Result<()> {
        self.emit(&Line::Tick { state })
    }

    fn game_over(&mut self, cause: Cause, last: &GameState) -> Result<()> {
        self.emit(&Line::GameOver { cause, last })?;
        self.out.flush().wrap_err("failed to flush replay")
    }
}
