//! Stuck-board detection.

use crate::{Board, Cell, SIZE};
use tracing::instrument;

/// Checks whether no move can ever change the board again.
///
/// True iff every cell is occupied and no two horizontally or vertically
/// adjacent cells hold the same value. Reaching any particular tile is
/// not considered.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() && !has_equal_neighbors(board)
}

fn has_equal_neighbors(board: &Board) -> bool {
    Cell::all().any(|cell| {
        let value = board.get(cell);
        let below = cell.row + 1 < SIZE && board.get(Cell::new(cell.row + 1, cell.col)) == value;
        let right = cell.col + 1 < SIZE && board.get(Cell::new(cell.row, cell.col + 1)) == value;
        value != 0 && (below || right)
    })
}
