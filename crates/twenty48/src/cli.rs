//! Command-line interface for twenty48.

use crate::config::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;
use twenty48_board::SpawnRule;

/// Twenty48 - slide and merge tiles on a 4x4 board
///
/// Arrow keys shift the board, `q` or `Esc` quits.
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(about = "Slide-and-merge tile puzzle in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for tile placement, to replay a game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames per second of the game loop
    #[arg(long)]
    pub fps: Option<u32>,

    /// When new tiles appear: `always` or `on_change`
    #[arg(long)]
    pub spawn_rule: Option<SpawnRule>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Splits out the flags that override file settings.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            fps: self.fps,
            spawn_rule: self.spawn_rule,
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}
