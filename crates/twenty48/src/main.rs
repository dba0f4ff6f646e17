//! Twenty48 - play 2048 in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use twenty48::{App, Cli, Exit, GameSettings, Session, logging};
use twenty48_board::Game;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => GameSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => GameSettings::default(),
    };
    let settings = settings.with_overrides(cli.overrides())?;

    logging::init(settings.log_file())?;
    info!(?settings, "Starting twenty48");

    let seed = settings.seed().unwrap_or_else(rand::random);
    let game = Game::new(seed, *settings.spawn_rule());

    let exit = Session::enter(App::new(game, settings))?.run()?;
    match exit {
        Exit::Quit => info!("Session ended by player"),
        Exit::Stuck => info!(seed, "Session ended on a stuck board"),
    }

    Ok(())
}
