//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48_board::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Shift the board.
    Shift(Direction),
    /// Leave immediately.
    Quit,
}

/// Maps a key event to an action. Releases, repeats and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::Shift(Direction::Up)),
        KeyCode::Down => Some(Action::Shift(Direction::Down)),
        KeyCode::Left => Some(Action::Shift(Direction::Left)),
        KeyCode::Right => Some(Action::Shift(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}
