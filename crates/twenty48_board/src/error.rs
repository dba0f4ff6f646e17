//! Board construction errors.

/// Error raised when building a board from explicit values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A nonzero value that no sequence of merges can produce.
    #[display("Tile {value} at row {row}, column {col} is not a power of two of at least 2")]
    InvalidTile {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },

    /// A power of two larger than any tile a 4x4 board can build.
    #[display("Tile {value} at row {row}, column {col} exceeds the largest reachable tile")]
    TileTooLarge {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },
}
