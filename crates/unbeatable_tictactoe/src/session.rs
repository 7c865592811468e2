//! A single game between a human player and the engine.
//!
//! The session owns the live board and the turn state. It is the only
//! interface a front end needs: apply the player's moves, ask the engine
//! for its reply, reset, and pick the search strategy.

use crate::board::Board;
use crate::engine::{SearchResult, Strategy, apply_best_move};
use crate::error::GameError;
use crate::invariants::{BoardConsistent, Invariant, InvariantSet, MoveInvariants, Transition};
use crate::position::Position;
use crate::rules::{Verdict, classify, is_full};
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a finished game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Win,
    /// The engine completed a line.
    Lose,
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Maps a terminal verdict to an outcome, `None` while play continues.
    pub fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Ongoing => None,
            Verdict::Win(Mark::Theirs) => Some(Outcome::Win),
            Verdict::Win(Mark::Mine) => Some(Outcome::Lose),
            Verdict::Draw => Some(Outcome::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "You win!"),
            Outcome::Lose => write!(f, "You lose!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Turn state of a game.
///
/// `PlayerTurn → EngineTurn → PlayerTurn | Finished`. `Finished` is
/// absorbing until [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human player.
    PlayerTurn,
    /// Waiting for the engine.
    EngineTurn,
    /// The game is decided.
    Finished(Outcome),
}

/// Live game state plus the selected search strategy.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    strategy: Strategy,
    last_search: Option<SearchResult>,
}

impl GameSession {
    /// Starts a game on an empty board with the player to move.
    #[instrument]
    pub fn new(strategy: Strategy) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(),
            phase: Phase::PlayerTurn,
            strategy,
            last_search: None,
        }
    }

    /// Resumes a game from `board` with `to_move` on turn.
    ///
    /// A board that is already decided starts in [`Phase::Finished`].
    ///
    /// # Errors
    ///
    /// - [`GameError::InconsistentBoard`] if the mark counts differ by more than one.
    /// - [`GameError::OutOfTurn`] if `to_move` already has more marks than its opponent.
    #[instrument(skip(board))]
    pub fn from_board(
        board: Board,
        to_move: Mark,
        strategy: Strategy,
    ) -> Result<Self, GameError> {
        if !<BoardConsistent as Invariant<Board>>::holds(&board) {
            return Err(GameError::InconsistentBoard {
                mine: board.count(Mark::Mine),
                theirs: board.count(Mark::Theirs),
            });
        }
        if board.count(to_move) > board.count(to_move.opponent()) {
            warn!(?to_move, "Side with more marks cannot move again");
            return Err(GameError::OutOfTurn);
        }

        let phase = match Outcome::from_verdict(classify(&board)) {
            Some(outcome) => Phase::Finished(outcome),
            None if to_move == Mark::Theirs => Phase::PlayerTurn,
            None => Phase::EngineTurn,
        };
        debug!(?phase, "Resuming game from board");
        Ok(Self {
            board,
            phase,
            strategy,
            last_search: None,
        })
    }

    /// Places the player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is decided.
    /// - [`GameError::OutOfTurn`] if the engine is on turn.
    /// - [`GameError::IllegalMove`] if the cell is out of range or occupied.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Result<Verdict, GameError> {
        match self.phase {
            Phase::Finished(_) => return Err(GameError::GameOver),
            Phase::EngineTurn => return Err(GameError::OutOfTurn),
            Phase::PlayerTurn => {}
        }

        let before = self.board;
        let pos = self.board.set(row, col, Mark::Theirs)?;
        self.check_invariants(before);

        let verdict = self.advance(Phase::EngineTurn);
        info!(position = %pos, %verdict, "Player moved");
        Ok(verdict)
    }

    /// Lets the engine play its best move.
    ///
    /// Returns the chosen cell and the verdict after the move.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoMoveAvailable`] if the board is full.
    /// - [`GameError::GameOver`] if the game is decided.
    /// - [`GameError::OutOfTurn`] if the player is on turn.
    #[instrument(skip(self), fields(phase = ?self.phase, strategy = %self.strategy))]
    pub fn request_engine_move(&mut self) -> Result<(Position, Verdict), GameError> {
        if is_full(&self.board) {
            return Err(GameError::NoMoveAvailable);
        }
        match self.phase {
            Phase::Finished(_) => return Err(GameError::GameOver),
            Phase::PlayerTurn => return Err(GameError::OutOfTurn),
            Phase::EngineTurn => {}
        }

        let before = self.board;
        let result = apply_best_move(&mut self.board, self.strategy);
        let pos = (*result.position()).ok_or(GameError::NoMoveAvailable)?;
        self.last_search = Some(result);
        self.check_invariants(before);

        let verdict = self.advance(Phase::PlayerTurn);
        info!(position = %pos, %verdict, "Engine replied");
        Ok((pos, verdict))
    }

    /// Clears the board and gives the first move to the player.
    ///
    /// The strategy is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.phase = Phase::PlayerTurn;
        self.last_search = None;
    }

    /// Selects the strategy for the next engine move.
    #[instrument(skip(self))]
    pub fn set_strategy(&mut self, strategy: Strategy) {
        debug!(from = %self.strategy, to = %strategy, "Changing strategy");
        self.strategy = strategy;
    }

    /// Switches to the other strategy and returns it.
    pub fn toggle_strategy(&mut self) -> Strategy {
        self.set_strategy(self.strategy.toggle());
        self.strategy
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Strategy used for the next engine move.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Outcome once the game is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Report of the most recent engine search.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Classifies the board and moves to `next`, or to `Finished`.
    fn advance(&mut self, next: Phase) -> Verdict {
        let verdict = classify(&self.board);
        self.phase = match Outcome::from_verdict(verdict) {
            Some(outcome) => {
                info!(%outcome, "Game over");
                Phase::Finished(outcome)
            }
            None => next,
        };
        verdict
    }

    fn check_invariants(&self, before: Board) {
        let transition = Transition::new(before, self.board);
        if let Err(violations) = MoveInvariants::check_all(&transition) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Move invariants violated: {violations:?}");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_awaits_player() {
        let session = GameSession::new(Strategy::Pruned);
        assert_eq!(session.phase(), Phase::PlayerTurn);
        assert_eq!(session.board(), &Board::new());
        assert!(session.last_search().is_none());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Strategy::Pruned);
        assert_eq!(session.apply_player_move(1, 1), Ok(Verdict::Ongoing));
        assert_eq!(session.phase(), Phase::EngineTurn);

        let (pos, verdict) = session.request_engine_move().unwrap();
        assert_eq!(verdict, Verdict::Ongoing);
        assert_ne!(pos, Position::Center);
        assert_eq!(session.phase(), Phase::PlayerTurn);
        assert!(session.last_search().is_some());
    }

    #[test]
    fn test_out_of_turn_is_rejected() {
        let mut session = GameSession::new(Strategy::Pruned);
        assert_eq!(session.request_engine_move(), Err(GameError::OutOfTurn));

        session.apply_player_move(0, 0).unwrap();
        let before = *session.board();
        assert_eq!(session.apply_player_move(0, 1), Err(GameError::OutOfTurn));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut session = GameSession::new(Strategy::Pruned);
        session.apply_player_move(0, 0).unwrap();
        session.request_engine_move().unwrap();

        let before = *session.board();
        assert_eq!(
            session.apply_player_move(0, 0),
            Err(GameError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(
            session.apply_player_move(0, 5),
            Err(GameError::IllegalMove { row: 0, col: 5 })
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn test_reset_keeps_strategy() {
        let mut session = GameSession::new(Strategy::Exhaustive);
        session.apply_player_move(2, 2).unwrap();
        session.toggle_strategy();
        session.reset();

        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.phase(), Phase::PlayerTurn);
        assert_eq!(session.strategy(), Strategy::Pruned);
    }

    #[test]
    fn test_from_board_finished() {
        let board: Board = "OOO XX. ...".parse().unwrap();
        let mut session = GameSession::from_board(board, Mark::Mine, Strategy::Pruned).unwrap();
        assert_eq!(session.outcome(), Some(Outcome::Win));
        assert_eq!(session.request_engine_move(), Err(GameError::GameOver));
        assert_eq!(session.apply_player_move(2, 2), Err(GameError::GameOver));
    }

    #[test]
    fn test_from_board_rejects_lopsided_counts() {
        let board: Board = "XX. ... ...".parse().unwrap();
        for to_move in [Mark::Mine, Mark::Theirs] {
            assert_eq!(
                GameSession::from_board(board, to_move, Strategy::Pruned).unwrap_err(),
                GameError::InconsistentBoard { mine: 2, theirs: 0 }
            );
        }
    }

    #[test]
    fn test_from_board_rejects_side_that_already_moved() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(
            GameSession::from_board(board, Mark::Mine, Strategy::Pruned).unwrap_err(),
            GameError::OutOfTurn
        );

        let mut session = GameSession::from_board(board, Mark::Theirs, Strategy::Pruned).unwrap();
        assert_eq!(session.phase(), Phase::PlayerTurn);
        session.apply_player_move(1, 1).unwrap();
        session.request_engine_move().unwrap();
        assert_eq!(session.board().count(Mark::Mine), 2);
        assert_eq!(session.board().count(Mark::Theirs), 1);
    }

    #[test]
    fn test_outcome_from_verdict() {
        assert_eq!(Outcome::from_verdict(Verdict::Ongoing), None);
        assert_eq!(Outcome::from_verdict(Verdict::Win(Mark::Theirs)), Some(Outcome::Win));
        assert_eq!(Outcome::from_verdict(Verdict::Win(Mark::Mine)), Some(Outcome::Lose));
        assert_eq!(Outcome::from_verdict(Verdict::Draw), Some(Outcome::Draw));
    }
}
