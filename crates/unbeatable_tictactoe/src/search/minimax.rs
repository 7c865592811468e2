//! Exhaustive minimax.

use super::{Score, Search, SearchStats, side_to_move, terminal_score};
use crate::board::Board;
use crate::position::Position;
use crate::types::Cell;

/// Plain minimax: every legal continuation is explored.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Creates a searcher with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Search for Minimax {
    fn evaluate(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> Score {
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
            let score = self.evaluate(board, depth + 1, !maximizing);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
