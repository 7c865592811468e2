//! Error types for moves and board parsing.

/// Error returned when a move cannot be made.
///
/// A rejected move never changes the board or the turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell is out of range or already occupied.
    #[display("Illegal move at ({}, {})", row, col)]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The engine was asked to move on a full board.
    #[display("No move available: the board is full")]
    NoMoveAvailable,

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A resumed board whose mark counts differ by more than one.
    #[display("Inconsistent board: {} X marks against {} O marks", mine, theirs)]
    InconsistentBoard {
        /// Cells holding the engine's mark.
        mine: usize,
        /// Cells holding the player's mark.
        theirs: usize,
    },

    /// The side asking to move is not on turn.
    #[display("It is not this side's turn")]
    OutOfTurn,
}

impl std::error::Error for GameError {}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A character that is not a cell symbol or separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
}

impl std::error::Error for BoardParseError {}
