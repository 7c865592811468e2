//! Text and JSON reports for the `best-move` and `compare` commands.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{info, instrument};
use unbeatable_tictactoe::{Board, SearchResult, Strategy, Verdict, best_move, classify};

/// A position together with the engine's answer for it.
#[derive(Debug, Serialize)]
pub struct BestMoveReport {
    /// Board searched, in display notation.
    pub board: String,
    /// Engine's answer.
    pub result: SearchResult,
}

/// Rejects positions where the engine has nothing to decide.
fn ensure_open(board: &Board) -> Result<()> {
    match classify(board) {
        Verdict::Ongoing => Ok(()),
        verdict => bail!("position is already decided: {verdict}"),
    }
}

/// Searches `board` with `strategy` for the engine's move.
///
/// # Errors
///
/// Fails if the position is already won or drawn.
#[instrument(skip(board))]
pub fn best_move_report(board: &Board, strategy: Strategy) -> Result<BestMoveReport> {
    ensure_open(board)?;
    Ok(BestMoveReport {
        board: board.to_string(),
        result: best_move(board, strategy),
    })
}

impl BestMoveReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let result = &self.result;
        let mut out = format!("{}\n\n", self.board);
        out.push_str(&format!("Strategy:  {}\n", result.strategy().label()));
        if let (Some(pos), Some(score)) = (result.position(), result.score()) {
            out.push_str(&format!("Best move: {} [score {}]\n", pos, score));
        }
        out.push_str("Candidates:\n");
        for (pos, score) in result.candidates() {
            out.push_str(&format!("  {:<22} {:>4}\n", pos.to_string(), score));
        }
        out.push_str(&format!(
            "Nodes: {}  Prunes: {}\n",
            result.stats().nodes,
            result.stats().prunes
        ));
        out
    }
}

/// Both strategies run on one position.
#[derive(Debug)]
pub struct Comparison {
    /// Full minimax result.
    pub exhaustive: SearchResult,
    /// Alpha-beta result.
    pub pruned: SearchResult,
}

impl Comparison {
    /// Runs both strategies on `board`.
    ///
    /// # Errors
    ///
    /// Fails if the position is decided or the strategies disagree.
    #[instrument(skip(board))]
    pub fn run(board: &Board) -> Result<Self> {
        ensure_open(board)?;
        let exhaustive = best_move(board, Strategy::Exhaustive);
        let pruned = best_move(board, Strategy::Pruned);

        if exhaustive.position() != pruned.position() || exhaustive.score() != pruned.score() {
            bail!(
                "strategies disagree: {:?}/{:?} vs {:?}/{:?}",
                exhaustive.position(),
                exhaustive.score(),
                pruned.position(),
                pruned.score()
            );
        }

        info!(
            exhaustive_nodes = exhaustive.stats().nodes,
            pruned_nodes = pruned.stats().nodes,
            "Strategies agree"
        );
        Ok(Self { exhaustive, pruned })
    }

    /// Fraction of exhaustive nodes that pruning skipped.
    pub fn savings(&self) -> f64 {
        let full = self.exhaustive.stats().nodes;
        if full == 0 {
            return 0.0;
        }
        1.0 - self.pruned.stats().nodes as f64 / full as f64
    }

    /// Side-by-side table.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{:<20} {:>24} {:>6} {:>9} {:>7}\n",
            "strategy", "move", "score", "nodes", "prunes"
        );
        for result in [&self.exhaustive, &self.pruned] {
            let pos = result.position().map(|p| p.to_string()).unwrap_or_else(|| "-".into());
            let score = result.score().map(|s| s.to_string()).unwrap_or_else(|| "-".into());
            out.push_str(&format!(
                "{:<20} {:>24} {:>6} {:>9} {:>7}\n",
                result.strategy().label(),
                pos,
                score,
                result.stats().nodes,
                result.stats().prunes
            ));
        }
        out.push_str(&format!("Pruning skipped {:.1}% of nodes\n", self.savings() * 100.0));
        out
    }
}
