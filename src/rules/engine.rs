//! Board engine: generation, flips, win detection.
//!
//! `BoardEngine` owns the randomness used to generate boards. Flipping and
//! querying need no randomness, so those take the board explicitly and
//! never touch engine state.
//!
//! ## Implementation Notes
//!
//! - `initialize`: validates the config, then draws every cell independently
//! - `flip`: never fails; off-board positions are skipped
//! - `status`: recomputed from the cells on every call

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{self, Board};
use crate::core::{BoardConfig, ConfigError, Coord, GameRng};

/// Progress of a board toward the win condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// At least one light is on.
    InProgress,
    /// Every light is off. Terminal.
    Won,
}

impl GameStatus {
    /// Status of a board, from its cells.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if board::is_all_unlit(board) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Check if this is the winning state.
    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// Creates and mutates boards.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    rng: GameRng,
}

impl BoardEngine {
    /// Engine with a fixed seed. Same seed, same sequence of boards.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Engine for a config: uses `config.seed` when set, entropy otherwise.
    #[must_use]
    pub fn for_config(config: &BoardConfig) -> Self {
        Self::with_rng(GameRng::from_optional_seed(config.seed))
    }

    /// Engine around an existing generator.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Access the generator (for checkpointing via `GameRng::state`).
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Create a fresh random board.
    ///
    /// Each cell is lit with probability `config.chance_lit_on_start`.
    /// `config.seed` is ignored here; the engine's own generator is used.
    pub fn initialize(&mut self, config: &BoardConfig) -> Result<Board, ConfigError> {
        let board = Board::generate(config, &mut self.rng).inspect_err(|err| {
            warn!(
                rows = config.rows,
                cols = config.cols,
                chance = config.chance_lit_on_start,
                %err,
                "rejected board config"
            );
        })?;

        debug!(
            rows = board.rows(),
            cols = board.cols(),
            lit = board::count_lit(&board),
            "generated board"
        );
        Ok(board)
    }

    /// Flip the plus shape at `(row, col)`. Returns whether the board is won.
    ///
    /// Any coordinate is accepted. Neighbors off the board are skipped and an
    /// off-board center leaves the board unchanged.
    pub fn flip(&self, board: &mut Board, coord: Coord) -> bool {
        let won = board::flip_cells_around(board, coord);
        debug!(%coord, won, "flip");
        won
    }

    /// Number of lit cells.
    #[must_use]
    pub fn count_lit(&self, board: &Board) -> usize {
        board::count_lit(board)
    }

    /// Current status of a board.
    #[must_use]
    pub fn status(&self, board: &Board) -> GameStatus {
        GameStatus::of(board)
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_extremes() {
        let mut engine = BoardEngine::new(42);

        for _ in 0..20 {
            let off = engine.initialize(&BoardConfig::new(4, 6).with_chance(0.0)).unwrap();
            assert_eq!(engine.count_lit(&off), 0);
            assert_eq!(engine.status(&off), GameStatus::Won);

            let on = engine.initialize(&BoardConfig::new(4, 6).with_chance(1.0)).unwrap();
            assert_eq!(engine.count_lit(&on), 24);
            assert_eq!(engine.status(&on), GameStatus::InProgress);
        }
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let mut engine = BoardEngine::new(1);
        assert_eq!(
            engine.initialize(&BoardConfig::new(0, 0)),
            Err(ConfigError::ZeroRows)
        );
        assert_eq!(
            engine.initialize(&BoardConfig::new(2, 2).with_chance(2.0)),
            Err(ConfigError::InvalidChance(2.0))
        );
    }

    #[test]
    fn test_successive_boards_are_independent() {
        let mut engine = BoardEngine::new(3);
        let config = BoardConfig::new(8, 8);
        let mut first = engine.initialize(&config).unwrap();
        let second = engine.initialize(&config).unwrap();

        // 64 fair coin flips colliding is vanishingly unlikely for this seed
        assert_ne!(first, second);

        let snapshot = second.clone();
        engine.flip(&mut first, Coord::new(0, 0));
        assert_eq!(second, snapshot);
    }

    #[test]
    fn test_same_seed_same_boards() {
        let config = BoardConfig::default();
        let mut a = BoardEngine::new(77);
        let mut b = BoardEngine::new(77);
        for _ in 0..5 {
            assert_eq!(a.initialize(&config).unwrap(), b.initialize(&config).unwrap());
        }
    }

    #[test]
    fn test_for_config_uses_seed() {
        let config = BoardConfig::default().with_seed(12);
        assert_eq!(BoardEngine::for_config(&config).rng().seed(), 12);
    }

    #[test]
    fn test_flip_reports_win() {
        let engine = BoardEngine::new(0);
        let mut board = Board::from_rows(vec![
            vec![true, true, false],
            vec![true, false, false],
        ])
        .unwrap();

        assert!(engine.flip(&mut board, Coord::new(0, 0)));
        assert_eq!(engine.status(&board), GameStatus::Won);
        assert!(!engine.flip(&mut board, Coord::new(1, 2)));
    }

    #[test]
    fn test_status_is_won() {
        assert!(GameStatus::Won.is_won());
        assert!(!GameStatus::InProgress.is_won());
    }
}
