//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two marks that can be placed on the board.
///
/// The engine always plays [`Mark::Mine`]; whoever it plays against
/// holds [`Mark::Theirs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The engine's own mark (rendered `X`).
    Mine,
    /// The opponent's mark (rendered `O`).
    Theirs,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Mine => Mark::Theirs,
            Mark::Theirs => Mark::Mine,
        }
    }

    /// Symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Mark::Mine => 'X',
            Mark::Theirs => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}
