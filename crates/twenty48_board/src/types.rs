//! Core domain types for the 2048 board.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Largest tile a 4x4 board can reach: every cell filled in a descending
/// chain ending in a spawned 4 merges into `2^17`.
pub const MAX_TILE: Tile = 1 << 17;

/// Value held by a cell. `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// A cell on the board, addressed by row (0 is the top) and column (0 is the left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-3).
    pub row: usize,
    /// Column index (0-3).
    pub col: usize,
}

impl Cell {
    /// Creates a cell address.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterates every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 4x4 board of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in row-major order.
    cells: [[Tile; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTile`] for the first nonzero value that
    /// is not a power of two of at least 2, and [`BoardError::TileTooLarge`]
    /// for one above [`MAX_TILE`].
    #[instrument]
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for cell in Cell::all() {
            let value = rows[cell.row][cell.col];
            if value == 0 {
                continue;
            }
            if value < 2 || !value.is_power_of_two() {
                return Err(BoardError::InvalidTile {
                    row: cell.row,
                    col: cell.col,
                    value,
                });
            }
            if value > MAX_TILE {
                return Err(BoardError::TileTooLarge {
                    row: cell.row,
                    col: cell.col,
                    value,
                });
            }
        }
        Ok(Self { cells: rows })
    }

    /// Gets the tile at the given cell.
    pub fn get(&self, cell: Cell) -> Tile {
        self.cells[cell.row][cell.col]
    }

    /// Sets the tile at the given cell.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        self.cells[cell.row][cell.col] = tile;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == 0
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[[Tile; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_empty(*cell)).collect()
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&tile| tile != 0)
    }

    /// Returns the largest tile, or 0 for an empty board.
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns the sum of all tiles. Shifting never changes it.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&tile| u64::from(tile)).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{tile:>5}")?;
                }
            }
        }
        Ok(())
    }
}
