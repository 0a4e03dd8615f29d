use std::io;

use color_eyre::Result;
use log::info;
use pixel_snake::{
    driver::{
        autopilot::Autopilot,
        config::Config,
        run,
        screen::{JsonLines, TextScreen},
        Session,
    },
    game::FoodPlacer,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let config = Config::from_env()?;

    let placer = match config.seed {
        Some(seed) => {
            info!("seeding food with {seed}");
            FoodPlacer::seeded(seed)
        }
        None => FoodPlacer::from_entropy(),
    };
    let mut session = Session::new(config.board, placer);

    let stdout = io::stdout().lock();
    let cause = if config.replay {
        run(
            &mut session,
            &mut Autopilot,
            &mut JsonLines::new(stdout),
            config.tick,
            config.max_ticks,
        )?
    } else {
        run(
            &mut session,
            &mut Autopilot,
            &mut TextScreen::new(stdout),
            config.tick,
            config.max_ticks,
        )?
    };

    match cause {
        Some(cause) => info!(
            "game over after {} ticks: {cause}, final length {}",
            session.ticks(),
            session.state().len()
        ),
        None => info!(
            "stopped after {} ticks at length {}",
            session.ticks(),
            session.state().len()
        ),
    }

    Ok(())
}
