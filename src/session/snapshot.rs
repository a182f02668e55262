//! Serializable view of a session for the presentation layer.

use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a UI renders: the grid, the click
/// counter, the board size and how many lights remain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Cell states, one inner `Vec` per row.
    pub board: Vec<Vec<bool>>,
    pub lit_count: usize,
    pub move_count: u64,
    pub won: bool,
}
