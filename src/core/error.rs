//! Error types.
//!
//! Every failure in this crate happens at construction time. Flips never
//! fail: an out-of-range coordinate is defined behavior, not an error.

/// Rejected board configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,

    #[error("board must have at least one column")]
    ZeroCols,

    #[error("chance_lit_on_start must be within [0, 1], got {0}")]
    InvalidChance(f64),

    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("board has no rows")]
    Empty,

    /// A row passed to `Board::from_rows` differs in length from the first.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Malformed `"row-col"` coordinate key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordParseError {
    #[error("coordinate key {0:?} is missing the '-' separator")]
    MissingSeparator(String),

    #[error("coordinate key {key:?} has a non-numeric {part}")]
    InvalidNumber { key: String, part: &'static str },
}
