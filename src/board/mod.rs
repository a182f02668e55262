//! Board storage and the flip rule.
//!
//! - `grid`: the `Board` type (fixed dimensions, row-major cells)
//! - `flip`: plus-shaped toggle, lit counting, win check

pub mod flip;
pub mod grid;

pub use flip::{count_lit, flip_cells_around, is_all_unlit, toggle_if_in_bounds};
pub use grid::Board;
