//! Move engine for 2048.
//!
//! This module contains the pure functions that change or evaluate a
//! board. Rules are separated from board storage so the game driver and
//! tests can compose them freely.

pub mod shift;
pub mod spawn;
pub mod terminal;

pub use shift::shift;
pub use spawn::spawn;
pub use terminal::is_terminal;
