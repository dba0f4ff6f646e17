//! New tile placement.

use crate::{Board, Cell, Tile};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Values a spawned tile can take, chosen with equal probability.
const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Places a 2 or a 4 into a uniformly chosen empty cell.
///
/// Returns the filled cell, or `None` when the board is full. A full board
/// is left untouched; that is not an error.
#[instrument(skip(board, rng))]
pub fn spawn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Cell> {
    let empty = board.empty_cells();
    let cell = *empty.choose(rng)?;
    let value = *SPAWN_VALUES.choose(rng)?;
    board.set(cell, value);
    debug!(%cell, value, "Spawned tile");
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_spawn_fills_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        let cell = spawn(&mut board, &mut rng).expect("board has room");
        assert!(matches!(board.get(cell), 2 | 4));
        assert_eq!(board.empty_cells().len(), 15);
    }

    #[test]
    fn test_spawn_on_full_board_is_no_op() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        let before = board;
        assert_eq!(spawn(&mut board, &mut rng), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_spawn_uses_the_only_gap() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut board = Board::from_rows([[2, 4, 2, 4], [4, 2, 0, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        assert_eq!(spawn(&mut board, &mut rng), Some(Cell::new(1, 2)));
        assert!(board.is_full());
    }

    #[test]
    fn test_spawn_values_are_even_odds() {
        let mut rng = StdRng::seed_from_u64(2048);
        let draws = 10_000;
        let mut fours = 0;
        for _ in 0..draws {
            let mut board = Board::new();
            let cell = spawn(&mut board, &mut rng).unwrap();
            match board.get(cell) {
                2 => {}
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        let share = f64::from(fours) / f64::from(draws);
        assert!((0.45..=0.55).contains(&share), "share of 4s was {share}");
    }

    #[test]
    fn test_spawn_cell_is_uniform() {
        // Left half filled, right half empty.
        let half = Board::from_rows([[2, 4, 0, 0], [4, 2, 0, 0], [2, 4, 0, 0], [4, 2, 0, 0]])
            .unwrap();
        let empty = half.empty_cells();
        assert_eq!(empty.len(), 8);

        let mut rng = StdRng::seed_from_u64(16);
        let mut hits = HashMap::new();
        for _ in 0..8_000 {
            let mut board = half;
            let cell = spawn(&mut board, &mut rng).unwrap();
            *hits.entry(cell).or_insert(0u32) += 1;
        }
        assert_eq!(hits.len(), empty.len());
        for cell in empty {
            let count = hits[&cell];
            assert!((800..=1200).contains(&count), "cell {cell} chosen {count} times");
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = Board::new();
        let mut b = Board::new();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(spawn(&mut a, &mut rng_a), spawn(&mut b, &mut rng_b));
        }
        assert_eq!(a, b);
    }
}
