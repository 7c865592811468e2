//! The 3x3 board.

use crate::error::{BoardParseError, GameError};
use crate::position::{BOARD_SIZE, Position};
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: every search works on its own snapshot, so the live
/// board only changes through [`Board::set`] and [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// True iff `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// True iff the cell at `pos` is empty.
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the cell is out of range or
    /// occupied. The board is unchanged in that case.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<Position, GameError> {
        let pos = Position::from_row_col(row, col).ok_or(GameError::IllegalMove { row, col })?;
        self.place(pos, mark)?;
        Ok(pos)
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the cell is occupied.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if !self.is_vacant(pos) {
            debug!(position = %pos, "Rejecting placement on occupied cell");
            return Err(GameError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.put(pos, Cell::Occupied(mark));
        Ok(())
    }

    /// Writes a cell without checks. Search uses this for place-and-undo.
    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Resets a cell to empty.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.put(pos, Cell::Empty);
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_vacant(pos))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.count(Mark::Mine) + self.count(Mark::Theirs)
    }
}

impl std::fmt::Display for Board {
    /// Renders `X|O|3` rows separated by `-+-+-`; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * BOARD_SIZE + col + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X` is the engine's mark, `O` the opponent's; `.`, `_` and the
    /// digits `1`-`9` are empty. Whitespace, `|`, `-` and `+` are ignored,
    /// so the output of `Display` parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => cells.push(Cell::Occupied(Mark::Mine)),
                'O' | 'o' => cells.push(Cell::Occupied(Mark::Theirs)),
                '.' | '_' | '1'..='9' => cells.push(Cell::Empty),
                '|' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                other => return Err(BoardParseError::UnexpectedChar(other)),
            }
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            board.put(pos, cell);
        }
        Ok(board)
    }
}
