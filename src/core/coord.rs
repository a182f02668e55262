//! Board coordinates.
//!
//! ## Coord
//!
//! A `(row, col)` pair of signed integers. Coordinates are not tied to a
//! board: any value is representable, and bounds are checked only where a
//! coordinate is applied to a board.
//!
//! ## Keys
//!
//! Presentation layers often identify cells by a `"row-col"` string. That
//! encoding is accepted through `FromStr`/`Display` only; the engine itself
//! works on structured coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::CoordParseError;

/// Offsets of the plus-shaped flip pattern: center, up, down, left, right.
pub const PLUS_OFFSETS: [(i64, i64); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell position, 0-based, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Shift by an offset. Returns `None` when the result would overflow `i64`.
    #[must_use]
    pub fn offset(self, d_row: i64, d_col: i64) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }

    /// The five positions touched by a flip centered here.
    ///
    /// Positions that cannot be represented are dropped; the center is
    /// always first.
    pub fn plus(self) -> impl Iterator<Item = Coord> {
        PLUS_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Convert to `(row, col)` indices if inside a `rows x cols` grid.
    #[must_use]
    pub fn to_index(self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|&r| r < rows)?;
        let col = usize::try_from(self.col).ok().filter(|&c| c < cols)?;
        Some((row, col))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parse a `"row-col"` key, e.g. `"2-3"`.
    ///
    /// The separator is the first `-` after the first character, so a
    /// negative row such as `"-1-0"` still parses.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let key = key.trim();
        let split = key
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| CoordParseError::MissingSeparator(key.to_string()))?;

        let (row, col) = (&key[..split], &key[split + 1..]);
        let row = row.parse().map_err(|_| CoordParseError::InvalidNumber {
            key: key.to_string(),
            part: "row",
        })?;
        let col = col.parse().map_err(|_| CoordParseError::InvalidNumber {
            key: key.to_string(),
            part: "column",
        })?;

        Ok(Self { row, col })
    }
}
