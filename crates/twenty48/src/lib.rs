//! Twenty48 library - terminal front end for the 2048 board
//!
//! The game rules live in [`twenty48_board`]; this crate wraps them in a
//! playable terminal program.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags parsed with clap
//! - **Config**: TOML settings layered under CLI overrides
//! - **Logging**: tracing output to a file, away from the TUI
//! - **Tui**: game context, key bindings, palette, rendering and the frame loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;

pub use cli::Cli;
pub use config::{ConfigError, GameSettings, SettingsOverrides};
pub use tui::Session;
pub use tui::app::{App, Control, Exit};
pub use tui::input::{Action, action_for};
pub use tui::palette::TileShade;
