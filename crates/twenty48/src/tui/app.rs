//! Application state for one play session.

use crate::config::GameSettings;
use crossterm::event::KeyEvent;
use tracing::{debug, info, instrument};
use twenty48_board::{Board, Game, MoveOutcome};

use super::input::{Action, action_for};

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave now.
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player quit.
    Quit,
    /// No move could change the board.
    Stuck,
}

/// Game context: the running game plus the settings it was started with.
#[derive(Debug)]
pub struct App {
    game: Game,
    settings: GameSettings,
    last_move: Option<MoveOutcome>,
}

impl App {
    /// Creates the context around a started game.
    pub fn new(game: Game, settings: GameSettings) -> Self {
        Self {
            game,
            settings,
            last_move: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board being played.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Gets the session settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Gets the most recent move, if any.
    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.last_move.as_ref()
    }

    /// Checks if the board is stuck.
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match action_for(key) {
            Some(Action::Quit) => {
                info!(moves = self.game.moves(), "Player quit");
                Control::Quit
            }
            Some(Action::Shift(direction)) => {
                let outcome = self.game.play(direction);
                debug!(?outcome, "Handled move");
                self.last_move = Some(outcome);
                Control::Continue
            }
            None => Control::Continue,
        }
    }

    /// Status line shown under the board.
    pub fn status_line(&self) -> String {
        match &self.last_move {
            _ if self.is_over() => "Game Over!".to_string(),
            None => "Arrow keys to move, q to quit".to_string(),
            Some(outcome) if !outcome.moved => format!("{} changed nothing", outcome.direction),
            Some(outcome) => format!("Moved {}", outcome.direction),
        }
    }
}
