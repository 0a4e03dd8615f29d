use std::{env, str::FromStr, time::Duration};

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};

use crate::grid::{Board, HEIGHT, WIDTH};

pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Settings for a hosted game, read from `SNAKE_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub board:     Board,
    pub tick:      Duration,
    pub seed:      Option<u64>,
    pub max_ticks: Option<u64>,
    pub replay:    bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board:     Board::default(),
            tick:      DEFAULT_TICK,
            seed:      None,
            max_ticks: None,
            replay:    false,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Fails if any variable is set to something unparseable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Fails if any value is unparseable or describes an unusable board.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let width = parse(&lookup, "SNAKE_WIDTH")?.unwrap_or(WIDTH);
        let height = parse(&lookup, "SNAKE_HEIGHT")?.unwrap_or(HEIGHT);
        let board = Board::new(width, height)
            .wrap_err("SNAKE_WIDTH/SNAKE_HEIGHT describe an unusable board")?;

        let tick = parse(&lookup, "SNAKE_TICK_MS")?
            .map_or(DEFAULT_TICK, Duration::from_millis);

        let replay = match lookup("SNAKE_REPLAY") {
            None => false,
            Some(value) => parse_flag(&value)
                .wrap_err("SNAKE_REPLAY should be a boolean")?,
        };

        Ok(Self {
            board,
            tick,
            seed: parse(&lookup, "SNAKE_SEED")?,
            max_ticks: parse(&lookup, "SNAKE_MAX_TICKS")?,
            replay,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .wrap_err_with(|| format!("invalid value {value:?} for {key}"))
        })
        .transpose()
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{other:?} is neither true nor false"),
    }
}
