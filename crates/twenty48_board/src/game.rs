//! Game driver: a board, its RNG and the shift-then-spawn turn.

use crate::rules::{is_terminal, shift, spawn};
use crate::{Board, Cell, Direction};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// When a new tile appears after a directional input.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpawnRule {
    /// Spawn after every input, even one that changed nothing.
    #[default]
    Always,
    /// Spawn only when the shift moved or merged a tile.
    OnChange,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one move can still change the board.
    InProgress,
    /// The board is full and has no equal neighbors.
    Stuck,
}

/// What one directional input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The input that was applied.
    pub direction: Direction,
    /// Whether the shift moved or merged any tile.
    pub moved: bool,
    /// Cell that received a new tile, if any.
    pub spawned: Option<Cell>,
}

/// A single game of 2048.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: StdRng,
    seed: u64,
    spawn_rule: SpawnRule,
    moves: u32,
}

impl Game {
    /// Starts a game: empty board plus two spawned tiles.
    #[instrument]
    pub fn new(seed: u64, spawn_rule: SpawnRule) -> Self {
        let mut game = Self::from_board(Board::new(), seed, spawn_rule);
        spawn(&mut game.board, &mut game.rng);
        spawn(&mut game.board, &mut game.rng);
        info!(seed, %spawn_rule, "New game");
        game
    }

    /// Continues from an existing board without adding tiles.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, seed: u64, spawn_rule: SpawnRule) -> Self {
        Self {
            board,
            rng: StdRng::seed_from_u64(seed),
            seed,
            spawn_rule,
            moves: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seed this game's RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the spawn rule.
    pub fn spawn_rule(&self) -> SpawnRule {
        self.spawn_rule
    }

    /// Returns how many directional inputs have been applied.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        if is_terminal(&self.board) {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }

    /// Checks if the game is stuck.
    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Stuck
    }

    /// Applies one directional input: shift, then spawn per the spawn rule.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn play(&mut self, direction: Direction) -> MoveOutcome {
        let moved = shift(&mut self.board, direction);
        let spawned = match (self.spawn_rule, moved) {
            (SpawnRule::OnChange, false) => None,
            _ => spawn(&mut self.board, &mut self.rng),
        };
        self.moves += 1;
        debug!(moved, ?spawned, max_tile = self.board.max_tile(), "Move applied");
        MoveOutcome {
            direction,
            moved,
            spawned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_game_has_two_tiles() {
        let game = Game::new(3, SpawnRule::Always);
        assert_eq!(game.board().empty_cells().len(), 14);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(1234, SpawnRule::Always);
        let mut b = Game::new(1234, SpawnRule::Always);
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.play(dir), b.play(dir));
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_always_spawns_after_no_op() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut game = Game::from_board(board, 5, SpawnRule::Always);
        let outcome = game.play(Direction::Left);
        assert!(!outcome.moved);
        assert!(outcome.spawned.is_some());
        assert_eq!(game.board().empty_cells().len(), 14);
    }

    #[test]
    fn test_on_change_skips_spawn_after_no_op() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut game = Game::from_board(board, 5, SpawnRule::OnChange);
        let outcome = game.play(Direction::Up);
        assert!(!outcome.moved);
        assert_eq!(outcome.spawned, None);
        assert_eq!(game.board(), &board);
        assert_eq!(game.moves(), 1);

        let outcome = game.play(Direction::Right);
        assert!(outcome.moved);
        assert!(outcome.spawned.is_some());
    }

    #[test]
    fn test_stuck_board_reports_stuck() {
        let board =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        let mut game = Game::from_board(board, 0, SpawnRule::Always);
        assert!(game.is_over());
        let outcome = game.play(Direction::Down);
        assert!(!outcome.moved);
        assert_eq!(outcome.spawned, None);
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_spawn_rule_names() {
        assert_eq!(SpawnRule::from_str("on_change").unwrap(), SpawnRule::OnChange);
        assert_eq!(SpawnRule::Always.to_string(), "always");
        assert_eq!(SpawnRule::default(), SpawnRule::Always);
    }
}
