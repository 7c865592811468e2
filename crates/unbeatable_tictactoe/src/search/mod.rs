//! Game-tree search.
//!
//! Two interchangeable strategies score a position for the engine:
//! [`Minimax`] walks the whole tree, [`AlphaBeta`] skips branches that
//! cannot change the result. Both return the same score for every
//! position when started with the full window.

mod alpha_beta;
mod minimax;

pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;

use crate::board::Board;
use crate::rules::{Verdict, classify};
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Position score from the engine's point of view.
pub type Score = i32;

/// Base score of a win. A win found `d` plies deep scores `WIN_SCORE - d`.
///
/// Depth never exceeds 9 on a 3x3 board, so wins stay positive and
/// losses negative.
pub const WIN_SCORE: Score = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: Score = 0;

/// Initial alpha for a full-window search.
pub const ALPHA_MIN: Score = Score::MIN;

/// Initial beta for a full-window search.
pub const BETA_MAX: Score = Score::MAX;

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Nodes that stopped early on a `beta <= alpha` cutoff.
    pub prunes: u64,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.prunes += other.prunes;
    }
}

/// A strategy that scores positions for the engine.
pub trait Search {
    /// Scores `board` at `depth` plies below the root, with the engine to
    /// move when `maximizing` is true.
    ///
    /// The board is used as scratch space and is restored before returning.
    fn evaluate(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> Score;

    /// Counters accumulated since construction.
    fn stats(&self) -> SearchStats;
}

/// Score of a finished position, `None` while play continues.
pub fn terminal_score(board: &Board, depth: u32) -> Option<Score> {
    let depth = depth as Score;
    match classify(board) {
        Verdict::Win(Mark::Mine) => Some(WIN_SCORE - depth),
        Verdict::Win(Mark::Theirs) => Some(depth - WIN_SCORE),
        Verdict::Draw => Some(DRAW_SCORE),
        Verdict::Ongoing => None,
    }
}

/// The mark placed by the side to move.
pub(crate) fn side_to_move(maximizing: bool) -> Mark {
    if maximizing { Mark::Mine } else { Mark::Theirs }
}

/// Exhaustive minimax score of `board`.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> Score {
    let mut scratch = *board;
    Minimax::new().evaluate(&mut scratch, depth, maximizing)
}

/// Alpha-beta score of `board` within the window `(alpha, beta)`.
///
/// With `alpha = ALPHA_MIN` and `beta = BETA_MAX` the result equals
/// [`minimax`].
pub fn minimax_pruned(
    board: &Board,
    depth: u32,
    maximizing: bool,
    alpha: Score,
    beta: Score,
) -> Score {
    let mut scratch = *board;
    AlphaBeta::new().evaluate_window(&mut scratch, depth, maximizing, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores_prefer_fast_wins_and_slow_losses() {
        let mine: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(terminal_score(&mine, 1), Some(9));
        assert_eq!(terminal_score(&mine, 5), Some(5));

        let theirs: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(terminal_score(&theirs, 1), Some(-9));
        assert_eq!(terminal_score(&theirs, 5), Some(-5));

        let draw: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(terminal_score(&draw, 9), Some(DRAW_SCORE));

        assert_eq!(terminal_score(&Board::new(), 0), None);
    }

    #[test]
    fn test_empty_board_is_a_draw_for_both_strategies() {
        let board = Board::new();
        assert_eq!(minimax(&board, 0, true), DRAW_SCORE);
        assert_eq!(minimax_pruned(&board, 0, true, ALPHA_MIN, BETA_MAX), DRAW_SCORE);
    }

    #[test]
    fn test_free_functions_leave_board_untouched() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let before = board;
        minimax(&board, 0, true);
        minimax_pruned(&board, 0, false, ALPHA_MIN, BETA_MAX);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stats_add() {
        let mut total = SearchStats { nodes: 3, prunes: 1 };
        total += SearchStats { nodes: 4, prunes: 2 };
        assert_eq!(total, SearchStats { nodes: 7, prunes: 3 });
    }
}
