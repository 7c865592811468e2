//! Unbeatable tic-tac-toe engine.
//!
//! A perfect-play decision engine for 3x3 tic-tac-toe. The engine scores
//! every legal move by searching the full game tree, either with plain
//! minimax or with alpha-beta pruning; both pick the same move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Mark`], [`Position`]
//! - **Rules**: [`classify`] and the line/fullness predicates
//! - **Search**: [`Minimax`] and [`AlphaBeta`] behind the [`Search`] trait
//! - **Engine**: [`best_move`] and [`choose_move`] for a given [`Strategy`]
//! - **Session**: [`GameSession`], the player-versus-engine game loop
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameSession, Strategy, Verdict};
//!
//! let mut session = GameSession::new(Strategy::Pruned);
//! let verdict = session.apply_player_move(1, 1)?;
//! assert_eq!(verdict, Verdict::Ongoing);
//!
//! let (position, _) = session.request_engine_move()?;
//! assert_eq!((position.row(), position.col()), (0, 0));
//! # Ok::<(), unbeatable_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod invariants;
mod position;
mod session;
mod types;

pub mod rules;
pub mod search;

pub use board::Board;
pub use engine::{SearchResult, Strategy, apply_best_move, best_move, choose_move};
pub use error::{BoardParseError, GameError};
pub use invariants::{
    BoardConsistent, Invariant, InvariantSet, InvariantViolation, MoveInvariants, SinglePlacement,
    Transition,
};
pub use position::{BOARD_SIZE, Position};
pub use rules::{Verdict, classify, has_line, is_full, winner};
pub use search::{
    ALPHA_MIN, AlphaBeta, BETA_MAX, DRAW_SCORE, Minimax, Score, Search, SearchStats, WIN_SCORE,
    minimax, minimax_pruned,
};
pub use session::{GameSession, Outcome, Phase};
pub use types::{Cell, Mark};
