//! Minimax with alpha-beta pruning.

use super::{ALPHA_MIN, BETA_MAX, Score, Search, SearchStats, side_to_move, terminal_score};
use crate::board::Board;
use crate::position::Position;
use crate::types::Cell;

/// Minimax that stops scanning a node once `beta <= alpha`.
///
/// `alpha` is the score the engine is already guaranteed by an ancestor,
/// `beta` the score the opponent is already guaranteed.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    /// Creates a searcher with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `board` within `(alpha, beta)`.
    ///
    /// Inside the window the result is exact; outside it is a bound on the
    /// exact score, which is all an ancestor needs to reject the branch.
    pub fn evaluate_window(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, depth) {
            return score;
        }

        let mark = side_to_move(maximizing);
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for pos in Position::ALL {
            if !board.is_vacant(pos) {
                continue;
            }
            board.put(pos, Cell::Occupied(mark));
            let score = self.evaluate_window(board, depth + 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.prunes += 1;
                return best;
            }
        }

        best
    }
}

impl Search for AlphaBeta {
    fn evaluate(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> Score {
        self.evaluate_window(board, depth, maximizing, ALPHA_MIN, BETA_MAX)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
