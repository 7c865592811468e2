//! Concrete positions with known answers.

use unbeatable_tictactoe::{
    Board, GameError, GameSession, Mark, Position, Strategy, WIN_SCORE, best_move, choose_move,
};

const STRATEGIES: [Strategy; 2] = [Strategy::Exhaustive, Strategy::Pruned];

#[test]
fn test_empty_board_engine_moves() {
    for strategy in STRATEGIES {
        let mut session = GameSession::from_board(Board::new(), Mark::Mine, strategy).unwrap();
        let (pos, _) = session.request_engine_move().expect("engine can move on an empty board");
        // Every opening draws, so the first cell in scan order wins the tie.
        assert_eq!(pos, Position::TopLeft);
    }
}

#[test]
fn test_engine_blocks_open_row() {
    // Opponent holds (0,0) and (0,1); the engine must take (0,2).
    let mut board = Board::new();
    board.set(0, 0, Mark::Theirs).unwrap();
    board.set(0, 1, Mark::Theirs).unwrap();
    board.set(1, 1, Mark::Mine).unwrap();

    for strategy in STRATEGIES {
        let mut live = board;
        assert_eq!(choose_move(&mut live, strategy), Some(Position::TopRight));
        assert_eq!(live.cell(0, 2), Some(unbeatable_tictactoe::Cell::Occupied(Mark::Mine)));
    }
}

#[test]
fn test_engine_takes_the_winning_cell() {
    // X X at (0,0) and (1,1); only (2,2) wins immediately.
    let board: Board = "XOO OX. ...".parse().unwrap();

    for strategy in STRATEGIES {
        let result = best_move(&board, strategy);
        assert_eq!(result.position(), &Some(Position::BottomRight));
        assert_eq!(result.score(), &Some(WIN_SCORE));
    }
}

#[test]
fn test_engine_prefers_win_over_block() {
    // The engine can win at (1,2) or block the opponent's row at (0,2).
    let board: Board = "OO. XX. O..".parse().unwrap();

    for strategy in STRATEGIES {
        let mut live = board;
        assert_eq!(choose_move(&mut live, strategy), Some(Position::MiddleRight));
    }
}

#[test]
fn test_full_board_has_no_move_available() {
    let board: Board = "OXO OXX XOO".parse().unwrap();

    for strategy in STRATEGIES {
        let mut session = GameSession::from_board(board, Mark::Mine, strategy).unwrap();
        assert_eq!(session.request_engine_move(), Err(GameError::NoMoveAvailable));
        assert_eq!(session.board(), &board);
    }
}

#[test]
fn test_choose_move_is_deterministic() {
    let board: Board = "O.. ... ...".parse().unwrap();

    for strategy in STRATEGIES {
        let first = best_move(&board, strategy);
        let second = best_move(&board, strategy);
        assert_eq!(first.position(), second.position());
    }
    assert_eq!(
        best_move(&board, Strategy::Exhaustive).position(),
        best_move(&board, Strategy::Pruned).position()
    );
}

#[test]
fn test_corner_opening_answered_with_center() {
    // Every non-center reply to a corner opening loses.
    let board: Board = "O.. ... ...".parse().unwrap();
    for strategy in STRATEGIES {
        assert_eq!(best_move(&board, strategy).position(), &Some(Position::Center));
    }
}

#[test]
fn test_lost_position_delays_defeat() {
    // O threatens the right column and forks after any block.
    let board: Board = "XXO O.. ..O".parse().unwrap();

    for strategy in STRATEGIES {
        let result = best_move(&board, strategy);
        assert_eq!(result.position(), &Some(Position::MiddleRight));
        assert_eq!(result.score(), &Some(3 - WIN_SCORE));
        assert_eq!(
            result.candidates(),
            &vec![
                (Position::Center, 1 - WIN_SCORE),
                (Position::MiddleRight, 3 - WIN_SCORE),
                (Position::BottomLeft, 1 - WIN_SCORE),
                (Position::BottomCenter, 1 - WIN_SCORE),
            ]
        );
    }
}
