//! Pure game logic for 2048 on a fixed 4x4 board.
//!
//! The crate has no terminal or I/O dependencies. It provides:
//!
//! - **Board**: a 4x4 grid of tile values where `0` marks an empty cell
//! - **Rules**: [`shift`], [`spawn`] and [`is_terminal`], the whole move engine
//! - **Game**: a board bundled with its seeded RNG, driving shift-then-spawn
//!
//! # Example
//!
//! ```
//! use twenty48_board::{Board, Direction, shift};
//!
//! let mut board = Board::from_rows([
//!     [2, 0, 2, 4],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])?;
//! assert!(shift(&mut board, Direction::Left));
//! assert_eq!(board.rows()[0], [4, 4, 0, 0]);
//! # Ok::<(), twenty48_board::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod direction;
mod error;
mod game;
mod rules;
mod types;

pub use direction::Direction;
pub use error::BoardError;
pub use game::{Game, GameStatus, MoveOutcome, SpawnRule};
pub use rules::{is_terminal, shift, spawn};
pub use types::{Board, Cell, MAX_TILE, SIZE, Tile};
