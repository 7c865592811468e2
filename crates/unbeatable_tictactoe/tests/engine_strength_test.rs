//! The engine never loses.

use unbeatable_tictactoe::{
    ALPHA_MIN, BETA_MAX, Board, Mark, Position, Strategy, Verdict, choose_move, classify,
    minimax_pruned,
};

/// Plays the engine against every possible opponent reply and returns the
/// number of finished games. Panics if the opponent ever wins.
fn play_out(board: Board, to_move: Mark, strategy: Strategy) -> usize {
    match classify(&board) {
        Verdict::Win(Mark::Theirs) => panic!("engine lost with {strategy}:\n{board}"),
        Verdict::Win(Mark::Mine) | Verdict::Draw => return 1,
        Verdict::Ongoing => {}
    }

    match to_move {
        Mark::Mine => {
            let mut next = board;
            let before = next.occupied();
            let pos = choose_move(&mut next, strategy).expect("ongoing board has an empty cell");
            assert!(board.is_vacant(pos));
            assert_eq!(next.occupied(), before + 1);
            play_out(next, Mark::Theirs, strategy)
        }
        Mark::Theirs => board
            .empty_positions()
            .map(|pos| {
                let mut next = board;
                next.place(pos, Mark::Theirs).unwrap();
                play_out(next, Mark::Mine, strategy)
            })
            .sum(),
    }
}

#[test]
fn test_engine_moving_second_never_loses() {
    for strategy in [Strategy::Exhaustive, Strategy::Pruned] {
        let games = play_out(Board::new(), Mark::Theirs, strategy);
        assert!(games > 0);
    }
}

#[test]
fn test_engine_moving_first_never_loses() {
    let games = play_out(Board::new(), Mark::Mine, Strategy::Pruned);
    assert!(games > 0);
}

/// Picks the opponent's reply that minimizes the engine's score.
fn optimal_reply(board: &Board) -> Position {
    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let mut next = *board;
        next.place(pos, Mark::Theirs).unwrap();
        let score = minimax_pruned(&next, 0, true, ALPHA_MIN, BETA_MAX);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos).expect("ongoing board has an empty cell")
}

#[test]
fn test_optimal_play_on_both_sides_is_a_draw() {
    for strategy in [Strategy::Exhaustive, Strategy::Pruned] {
        let mut board = Board::new();
        let mut to_move = Mark::Theirs;

        while !classify(&board).is_terminal() {
            match to_move {
                Mark::Theirs => board.place(optimal_reply(&board), Mark::Theirs).unwrap(),
                Mark::Mine => {
                    choose_move(&mut board, strategy).unwrap();
                }
            }
            to_move = to_move.opponent();
        }

        assert_eq!(classify(&board), Verdict::Draw, "{strategy}:\n{board}");
    }
}
