//! Game settings loaded from TOML and layered with CLI overrides.

use derive_getters::Getters;
use derive_more::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use twenty48_board::SpawnRule;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSettings {
    /// Frames per second of the event loop.
    #[serde(default = "default_fps")]
    fps: u32,

    /// How long the "Game Over!" message stays up before exiting.
    #[serde(default = "default_game_over_pause_ms")]
    game_over_pause_ms: u64,

    /// When new tiles appear.
    #[serde(default)]
    spawn_rule: SpawnRule,

    /// Fixed RNG seed. A fresh seed is drawn when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// File receiving trace output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_fps() -> u32 {
    30
}

#[instrument]
fn default_game_over_pause_ms() -> u64 {
    2000
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("twenty48.log")
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            game_over_pause_ms: default_game_over_pause_ms(),
            spawn_rule: SpawnRule::default(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

/// Values that replace settings when present, usually from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Replacement frame rate.
    pub fps: Option<u32>,
    /// Replacement spawn rule.
    pub spawn_rule: Option<SpawnRule>,
    /// Replacement seed.
    pub seed: Option<u64>,
    /// Replacement log file.
    pub log_file: Option<PathBuf>,
}

impl GameSettings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e)).in_file(path)
        })?;

        let settings = Self::from_toml(&content).map_err(|e| e.in_file(path))?;
        info!(fps = settings.fps, spawn_rule = %settings.spawn_rule, "Settings loaded");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()
    }

    /// Applies overrides, then validates the result.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        if let Some(fps) = overrides.fps {
            self.fps = fps;
        }
        if let Some(spawn_rule) = overrides.spawn_rule {
            self.spawn_rule = spawn_rule;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        self.validate()
    }

    /// Time budget of one frame.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// Pause before exiting once the board is stuck.
    pub fn game_over_pause(&self) -> Duration {
        Duration::from_millis(self.game_over_pause_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_FPS).contains(&self.fps) {
            return Err(ConfigError::new(format!(
                "fps must be between 1 and {}, got {}",
                MAX_FPS, self.fps
            )));
        }
        Ok(self)
    }
}

/// Settings that failed to load or validate.
///
/// Carries the settings file involved, when there is one, and the place in
/// this crate that rejected the settings.
#[derive(Debug, Clone, Error)]
pub struct ConfigError {
    /// What was wrong with the settings.
    pub message: String,
    /// Settings file being loaded, if the error came from one.
    pub path: Option<PathBuf>,
    /// Where the error was raised.
    pub location: &'static Location<'static>,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            location: Location::caller(),
        }
    }

    /// Attaches the settings file the error came from.
    pub fn in_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Config error in {}: ", path.display())?,
            None => write!(f, "Config error: ")?,
        }
        write!(f, "{} ({})", self.message, self.location)
    }
}
