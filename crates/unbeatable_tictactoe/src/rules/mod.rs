//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. The search engine calls these at
//! every node, so none of them allocate.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line, winner};

use crate::board::Board;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No line and at least one empty cell.
    Ongoing,
    /// The given mark owns a complete line.
    Win(Mark),
    /// Full board with no line.
    Draw,
}

impl Verdict {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "Ongoing"),
            Verdict::Win(mark) => write!(f, "{} wins", mark.symbol()),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board.
///
/// Precedence is fixed: a line for `Mine`, then a line for `Theirs`, then
/// fullness. A full board that also holds a line is a win.
pub fn classify(board: &Board) -> Verdict {
    match winner(board) {
        Some(mark) => Verdict::Win(mark),
        None if is_full(board) => Verdict::Draw,
        None => Verdict::Ongoing,
    }
}
