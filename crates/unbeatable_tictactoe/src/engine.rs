//! Top-level move selection.

use crate::board::Board;
use crate::position::Position;
use crate::search::{AlphaBeta, Minimax, Score, Search, SearchStats};
use crate::types::{Cell, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which search the engine runs.
///
/// Both strategies choose the same move for every position; they differ
/// only in how many nodes they visit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Full minimax.
    #[default]
    #[strum(to_string = "exhaustive", serialize = "minimax")]
    Exhaustive,
    /// Minimax with alpha-beta pruning.
    #[strum(to_string = "pruned", serialize = "alpha-beta", serialize = "alphabeta")]
    Pruned,
}

impl Strategy {
    /// Display label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exhaustive => "Pure Minimax",
            Self::Pruned => "Alpha-Beta Pruning",
        }
    }

    /// Switches to the other strategy.
    pub fn toggle(self) -> Self {
        match self {
            Self::Exhaustive => Self::Pruned,
            Self::Pruned => Self::Exhaustive,
        }
    }

    /// Builds a fresh searcher for this strategy.
    pub fn searcher(self) -> Box<dyn Search> {
        match self {
            Self::Exhaustive => Box::new(Minimax::new()),
            Self::Pruned => Box::new(AlphaBeta::new()),
        }
    }
}

/// Outcome of a top-level search for the engine's move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchResult {
    /// Strategy that produced this result.
    strategy: Strategy,
    /// Chosen cell, `None` when the board had no empty cell.
    position: Option<Position>,
    /// Score of the chosen cell.
    score: Option<Score>,
    /// Score of every candidate in scan order.
    candidates: Vec<(Position, Score)>,
    /// Counters summed over all candidates.
    stats: SearchStats,
}

/// Finds the engine's best move without touching `board`.
///
/// Every empty cell is tried in row-major order: `Mine` is placed on a
/// scratch copy and the opponent's best reply is searched from depth 0.
/// The first cell with the strictly highest score wins, so ties go to the
/// lowest index.
#[instrument(skip_all, fields(strategy = %strategy, occupied = board.occupied()))]
pub fn best_move(board: &Board, strategy: Strategy) -> SearchResult {
    let mut searcher = strategy.searcher();
    let mut scratch = *board;
    let mut best: Option<(Position, Score)> = None;
    let mut candidates = Vec::new();

    for pos in Position::ALL {
        if !scratch.is_vacant(pos) {
            continue;
        }
        scratch.put(pos, Cell::Occupied(Mark::Mine));
        let score = searcher.evaluate(&mut scratch, 0, false);
        scratch.clear(pos);

        debug!(position = %pos, score, "Scored candidate");
        candidates.push((pos, score));

        let improves = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    let stats = searcher.stats();
    debug!(nodes = stats.nodes, prunes = stats.prunes, "Search finished");

    SearchResult {
        strategy,
        position: best.map(|(pos, _)| pos),
        score: best.map(|(_, score)| score),
        candidates,
        stats,
    }
}

/// Finds the engine's best move and writes `Mine` there.
///
/// The board is left unchanged when it has no empty cell.
#[instrument(skip_all, fields(strategy = %strategy))]
pub fn apply_best_move(board: &mut Board, strategy: Strategy) -> SearchResult {
    let result = best_move(board, strategy);
    if let Some(pos) = result.position {
        // best_move only proposes vacant cells
        board.put(pos, Cell::Occupied(Mark::Mine));
        info!(position = %pos, score = ?result.score, nodes = result.stats.nodes, "Engine moved");
    } else {
        debug!("No empty cell, engine cannot move");
    }
    result
}

/// Plays the engine's best move on `board` and returns where it went.
///
/// Returns `None`, leaving the board as it was, if no cell is empty.
pub fn choose_move(board: &mut Board, strategy: Strategy) -> Option<Position> {
    apply_best_move(board, strategy).position
}
