//! The flip rule and board queries.
//!
//! A flip toggles the target cell and its four orthogonal neighbors.
//! Neighbors that fall off the board are skipped; there is no wraparound.

use crate::core::Coord;

use super::grid::Board;

/// Toggle one cell if it lies on the board.
///
/// Returns whether a cell was toggled.
pub fn toggle_if_in_bounds(board: &mut Board, coord: Coord) -> bool {
    match coord.to_index(board.rows(), board.cols()) {
        Some((row, col)) => {
            board.toggle_at(row, col);
            true
        }
        None => false,
    }
}

/// Flip the plus shape centered at `center`.
///
/// If the center is off the board nothing changes. Returns whether the
/// board is now fully unlit, found by scanning every cell.
pub fn flip_cells_around(board: &mut Board, center: Coord) -> bool {
    if board.contains(center) {
        for coord in center.plus() {
            toggle_if_in_bounds(board, coord);
        }
    }
    is_all_unlit(board)
}

/// Number of lit cells.
#[must_use]
pub fn count_lit(board: &Board) -> usize {
    board.cells().iter().filter(|&&lit| lit).count()
}

/// Win condition: no cell is lit.
#[must_use]
pub fn is_all_unlit(board: &Board) -> bool {
    !board.cells().iter().any(|&lit| lit)
}
