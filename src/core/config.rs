//! Board configuration.
//!
//! The presentation layer supplies a `BoardConfig` when starting a session.
//! Defaults match the classic game: a 5x5 board with each light on at
//! start with probability 0.5.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 5;

/// Default probability that a cell starts lit.
pub const DEFAULT_CHANCE_LIT: f64 = 0.5;

/// Upper bound on `rows * cols`.
pub const MAX_CELLS: usize = 1 << 24;

/// Construction input for a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of rows (must be positive).
    pub rows: usize,

    /// Number of columns (must be positive).
    pub cols: usize,

    /// Probability in `[0, 1]` that any cell is lit at start.
    pub chance_lit_on_start: f64,

    /// Seed for generation. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chance_lit_on_start: DEFAULT_CHANCE_LIT,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the given dimensions and default chance.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the probability that a cell starts lit.
    #[must_use]
    pub fn with_chance(mut self, chance_lit_on_start: f64) -> Self {
        self.chance_lit_on_start = chance_lit_on_start;
        self
    }

    /// Set a fixed seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check dimensions and probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.chance_lit_on_start) {
            return Err(ConfigError::InvalidChance(self.chance_lit_on_start));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }
}
