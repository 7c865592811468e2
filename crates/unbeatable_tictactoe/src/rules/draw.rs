//! Draw detection logic for tic-tac-toe.

use crate::board::Board;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().next().is_none()
}
