//! One playthrough: a board plus its move count.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{self, Board};
use crate::core::{BoardConfig, ConfigError, Coord, CoordParseError};
use crate::rules::{BoardEngine, GameStatus};

use super::snapshot::SessionSnapshot;

/// Why a flip was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The board is already cleared.
    AlreadyWon,
    /// The center cell is off the board, so nothing would change.
    OutOfBounds,
}

/// Result of `GameSession::flip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipOutcome {
    /// The flip was applied and counted as a move.
    Accepted {
        /// Whether this flip cleared the board.
        won: bool,
        /// Lights still on after the flip.
        lit: usize,
    },
    /// Nothing changed and the move count was not incremented.
    Rejected(RejectReason),
}

impl FlipOutcome {
    /// Check if the flip was applied.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, FlipOutcome::Accepted { .. })
    }

    /// Check if the flip won the game.
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, FlipOutcome::Accepted { won: true, .. })
    }
}

/// A game in progress.
///
/// Owns its board exclusively. The win flag is never stored; `is_won` and
/// `status` read it off the cells each time.
///
/// ## Flip policy
///
/// - Once won, further flips are rejected.
/// - A flip whose center is off the board is rejected and not counted.
/// - Every other flip is applied and increments `move_count` by one.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BoardConfig,
    board: Board,
    move_count: u64,
}

impl GameSession {
    /// Start a session on a freshly generated board.
    pub fn new(engine: &mut BoardEngine, config: BoardConfig) -> Result<Self, ConfigError> {
        let board = engine.initialize(&config)?;
        info!(rows = config.rows, cols = config.cols, "session started");
        Ok(Self {
            config,
            board,
            move_count: 0,
        })
    }

    /// Start a session on a known board.
    ///
    /// `reset` will generate boards of the same size with the default chance.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            config: BoardConfig::new(board.rows(), board.cols()),
            board,
            move_count: 0,
        }
    }

    /// Flip the plus shape centered at `coord`.
    pub fn flip(&mut self, coord: Coord) -> FlipOutcome {
        if self.is_won() {
            debug!(%coord, "flip rejected: already won");
            return FlipOutcome::Rejected(RejectReason::AlreadyWon);
        }
        if !self.board.contains(coord) {
            debug!(%coord, "flip rejected: off board");
            return FlipOutcome::Rejected(RejectReason::OutOfBounds);
        }

        let won = board::flip_cells_around(&mut self.board, coord);
        self.move_count = self.move_count.saturating_add(1);
        let lit = board::count_lit(&self.board);

        if won {
            info!(moves = self.move_count, "board cleared");
        } else {
            debug!(%coord, moves = self.move_count, lit, "flip");
        }
        FlipOutcome::Accepted { won, lit }
    }

    /// Flip using a presentation key such as `"2-3"`.
    pub fn flip_key(&mut self, key: &str) -> Result<FlipOutcome, CoordParseError> {
        let coord: Coord = key.parse()?;
        Ok(self.flip(coord))
    }

    /// Replace the board with a new random one and zero the move count.
    pub fn reset(&mut self, engine: &mut BoardEngine) -> Result<(), ConfigError> {
        self.board = engine.initialize(&self.config)?;
        self.move_count = 0;
        info!(rows = self.config.rows, cols = self.config.cols, "session reset");
        Ok(())
    }

    /// The configuration the session was started with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Accepted flips so far.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Lights currently on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        board::count_lit(&self.board)
    }

    /// Whether every light is off.
    #[must_use]
    pub fn is_won(&self) -> bool {
        board::is_all_unlit(&self.board)
    }

    /// Current status, read off the cells.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Everything the presentation layer shows, in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self.rows(),
            cols: self.cols(),
            board: self.board.to_rows(),
            lit_count: self.lit_count(),
            move_count: self.move_count,
            won: self.is_won(),
        }
    }
}
