//! Slide-and-merge logic.

use crate::{Board, Cell, Direction, SIZE};
use tracing::{instrument, trace};

/// Slides every tile toward the edge named by `direction`, merging equal
/// neighbors.
///
/// Each lane (a column for up/down, a row for left/right) is scanned from
/// the leading edge inward. Every tile walks toward the edge while the cell
/// ahead is empty, merges into the cell ahead when it holds the same value,
/// and stops in front of anything else. A merged cell is a barrier for the
/// rest of its lane, so a tile merges at most once per move.
///
/// Returns `true` iff any tile moved or merged.
#[instrument(skip(board))]
pub fn shift(board: &mut Board, direction: Direction) -> bool {
    let mut moved = false;
    for lane in 0..SIZE {
        moved |= shift_lane(board, &lane_cells(direction, lane));
    }
    moved
}

/// Cells of one lane, ordered from the edge tiles slide toward.
fn lane_cells(direction: Direction, lane: usize) -> [Cell; SIZE] {
    std::array::from_fn(|i| match direction {
        Direction::Up => Cell::new(i, lane),
        Direction::Down => Cell::new(SIZE - 1 - i, lane),
        Direction::Left => Cell::new(lane, i),
        Direction::Right => Cell::new(lane, SIZE - 1 - i),
    })
}

fn shift_lane(board: &mut Board, lane: &[Cell; SIZE]) -> bool {
    let mut moved = false;
    // Tiles may not enter lane[..floor]; it holds a tile merged this move.
    let mut floor = 0;

    for start in 1..SIZE {
        let tile = board.get(lane[start]);
        if tile == 0 {
            continue;
        }

        let mut k = start;
        while k > floor {
            let ahead = board.get(lane[k - 1]);
            if ahead == 0 {
                board.set(lane[k - 1], tile);
                board.set(lane[k], 0);
                moved = true;
                k -= 1;
            } else if ahead == tile
                && let Some(merged) = tile.checked_mul(2)
            {
                board.set(lane[k - 1], merged);
                board.set(lane[k], 0);
                moved = true;
                floor = k;
                trace!(cell = %lane[k - 1], value = merged, "Merged tiles");
                break;
            } else {
                break;
            }
        }
    }

    moved
}
