pub mod autopilot;
pub mod config;
pub mod screen;

use std::{
    collections::VecDeque,
    thread,
    time::{Duration, Instant},
};

use color_eyre::Result;
use log::info;
use rand::Rng;

use crate::{
    game::{render, Cause, FoodPlacer, Frame, GameState, TickOutcome},
    grid::{Board, Direction},
};

/// Where directions come from.
pub trait InputSource {
    /// The newest key press since the last poll, if there was one.
    fn poll(&mut self, state: &GameState) -> Option<Direction>;
}

/// Plays back a fixed list of presses, one per tick, then goes quiet.
#[derive(Clone, Debug, Default)]
pub struct Scripted(pub VecDeque<Direction>);

impl Scripted {
    pub fn new(presses: impl IntoIterator<Item = Direction>) -> Self {
        Self(presses.into_iter().collect())
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _state: &GameState) -> Option<Direction> {
        self.0.pop_front()
    }
}

/// Where frames go.
pub trait Screen {
    /// # Errors
    ///
    /// Whatever the underlying output reports.
    fn paint(&mut self, state: &GameState, frame: &Frame) -> Result<()>;

    /// # Errors
    ///
    /// Whatever the underlying output reports.
    fn game_over(&mut self, cause: Cause, last: &GameState) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Live(GameState),
    /// Absorbing: once here, ticking does nothing.
    Over { last: GameState, cause: Cause },
}

/// Threads game states from tick to tick and remembers the last key.
pub struct Session<R> {
    phase:    Phase,
    placer:   FoodPlacer<R>,
    last_key: Direction,
    ticks:    u64,
}

impl<R: Rng> Session<R> {
    pub fn new(board: Board, mut placer: FoodPlacer<R>) -> Self {
        let state = GameState::initial(board, &mut placer);
        Self::resume(state, placer)
    }

    /// Picks up from an existing state.
    pub fn resume(state: GameState, placer: FoodPlacer<R>) -> Self {
        Self {
            last_key: state.direction,
            phase: Phase::Live(state),
            placer,
            ticks: 0,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        self.last_key = direction;
    }

    pub fn tick(&mut self) -> &Phase {
        if let Phase::Live(state) = &self.phase {
            self.ticks += 1;
            self.phase = match state.step(self.last_key, &mut self.placer) {
                TickOutcome::Continuing(next) => Phase::Live(next),
                TickOutcome::GameOver(cause) => Phase::Over {
                    last: state.clone(),
                    cause,
                },
            };
        }
        &self.phase
    }

    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The current state, or the last live one after game over.
    pub const fn state(&self) -> &GameState {
        match &self.phase {
            Phase::Live(state) | Phase::Over { last: state, .. } => state,
        }
    }

    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Drives `session` at a fixed interval until the game ends or `max_ticks`
/// is reached. Returns the cause if the game ended.
///
/// # Errors
///
/// Fails if the screen does.
pub fn run<R: Rng>(
    session: &mut Session<R>,
    input: &mut impl InputSource,
    screen: &mut impl Screen,
    interval: Duration,
    max_ticks: Option<u64>,
) -> Result<Option<Cause>> {
    info!(
        "starting a {}x{} game, one tick every {} ms",
        session.state().board.width(),
        session.state().board.height(),
        interval.as_millis()
    );

    screen.paint(session.state(), &render(session.state()))?;

    let mut deadline = Instant::now();
    loop {
        if max_ticks.map_or(false, |limit| session.ticks() >= limit) {
            return Ok(None);
        }

        if let Some(direction) = input.poll(session.state()) {
            session.press(direction);
        }

        match session.tick() {
            Phase::Live(state) => screen.paint(state, &render(state))?,
            Phase::Over { last, cause } => {
                screen.game_over(*cause, last)?;
                return Ok(Some(*cause));
            }
        }

        deadline += interval;
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
        over:   Option<Cause>,
    }

    impl Screen for Recorder {
        fn paint(&mut self, _state: &GameState, frame: &Frame) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn game_over(&mut self, cause: Cause, _last: &GameState) -> Result<()> {
            self.over = Some(cause);
            Ok(())
        }
    }

    fn session() -> Session<rand::rngs::StdRng> {
        let state = GameState::new(
            Board::new(10, 10).unwrap(),
            [Coord::new(5, 5), Coord::new(4, 5)],
            Coord::new(0, 0),
            Direction::Right,
        );
        Session::resume(state, FoodPlacer::seeded(0))
    }

    #[test]
    fn game_over_is_absorbing() {
        let mut session = session();
        for _ in 0..4 {
            assert!(!session.is_over());
            session.tick();
        }
        assert!(matches!(
            session.tick(),
            Phase::Over {
                cause: Cause::OutOfBounds,
                ..
            }
        ));
        assert_eq!(session.state().head(), Coord::new(9, 5));

        let over = session.phase().clone();
        session.press(Direction::Up);
        session.tick();
        assert_eq!(session.phase(), &over);
        assert_eq!(session.ticks(), 5);
    }

    #[test]
    fn last_key_sticks_between_ticks() {
        let mut session = session();
        session.press(Direction::Down);
        session.tick();
        session.tick();
        assert_eq!(session.state().head(), Coord::new(5, 7));
        assert_eq!(session.state().direction, Direction::Down);
    }

    #[test]
    fn run_paints_every_tick_until_game_over() {
        let mut session = session();
        let mut screen = Recorder::default();
        let cause = run(
            &mut session,
            &mut Scripted::new([Direction::Up]),
            &mut screen,
            Duration::ZERO,
            None,
        )
        .unwrap();

        assert_eq!(cause, Some(Cause::OutOfBounds));
        assert_eq!(screen.over, Some(Cause::OutOfBounds));
        // initial frame plus the five live ticks up to row 0
        assert_eq!(screen.frames.len(), 6);
    }

    #[test]
    fn run_stops_at_the_tick_limit() {
        let mut session = session();
        let mut screen = Recorder::default();
        let cause = run(
            &mut session,
            &mut Scripted::default(),
            &mut screen,
            Duration::ZERO,
            Some(2),
        )
        .unwrap();

        assert_eq!(cause, None);
        assert_eq!(session.ticks(), 2);
        assert!(screen.over.is_none());
    }
}
