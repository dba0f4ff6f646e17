//! Terminal front end: session setup, the frame loop and rendering.

pub mod app;
pub mod input;
pub mod palette;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use app::{App, Control, Exit};

/// A running game bound to the terminal.
///
/// Owns the renderer handle and the game context. Dropping the session
/// restores the terminal, also when the loop bails out with an error.
pub struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
}

impl Session {
    /// Switches the terminal to raw mode on the alternate screen.
    #[instrument(skip_all)]
    pub fn enter(app: App) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to create terminal");
            }
        };
        debug!("Terminal session started");
        Ok(Self { terminal, app })
    }

    /// Gets the game context.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Runs the frame loop until the player quits or the board is stuck.
    ///
    /// Each frame drains pending key events, draws, then checks for a stuck
    /// board. A stuck board stays on screen with the game-over message for
    /// the configured pause before the loop returns.
    #[instrument(skip(self), fields(seed = self.app.game().seed()))]
    pub fn run(&mut self) -> Result<Exit> {
        let frame_budget = self.app.settings().frame_budget();
        info!(?frame_budget, "Starting game loop");

        loop {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()?
                    && self.app.handle_key(key) == Control::Quit
                {
                    return Ok(Exit::Quit);
                }
            }

            self.terminal.draw(|f| ui::draw(f, &self.app))?;

            if self.app.is_over() {
                info!(
                    moves = self.app.game().moves(),
                    max_tile = self.app.board().max_tile(),
                    "Board is stuck"
                );
                thread::sleep(self.app.settings().game_over_pause());
                return Ok(Exit::Stuck);
            }

            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        restore_terminal();
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        debug!("Terminal restored");
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}
