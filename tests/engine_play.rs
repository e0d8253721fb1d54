//! End-to-end behavior of the engine through the public API

use wuziqi::eval::evaluate;
use wuziqi::rules::{check_win, check_winner, winning_line};
use wuziqi::search::candidates;
use wuziqi::{choose_move, AIEngine, Board, Pos, Stone, CENTER};

fn place_row(board: &mut Board, row: u8, cols: impl IntoIterator<Item = u8>, stone: Stone) {
    for c in cols {
        board.place_stone(Pos::new(row, c), stone);
    }
}

#[test]
fn five_detected_four_not() {
    let mut board = Board::new();
    place_row(&mut board, 7, 3..7, Stone::Black);
    assert!(!check_win(&board, Pos::new(7, 6), Stone::Black));

    board.place_stone(Pos::new(7, 7), Stone::Black);
    assert!(check_win(&board, Pos::new(7, 7), Stone::Black));
    assert_eq!(check_winner(&board), Some(Stone::Black));
}

#[test]
fn blocked_four_scores_defense_on_both_ends() {
    let mut board = Board::new();
    place_row(&mut board, 7, 5..9, Stone::Black);
    let before = board.clone();

    let far = evaluate(&board, Pos::new(0, 0), Stone::White);
    for end in [Pos::new(7, 4), Pos::new(7, 9)] {
        let score = evaluate(&board, end, Stone::White);
        assert!(score >= 9_000, "{end} scored {score}");
        assert!(score > far);
    }
    assert_eq!(board, before);
}

#[test]
fn single_stone_candidates_are_the_5x5_ring() {
    let mut board = Board::new();
    board.place_stone(CENTER, Stone::Black);
    let cands = candidates(&board);
    assert_eq!(cands.len(), 24);
    assert!(cands.iter().all(|p| (1..=2).contains(&p.chebyshev(CENTER))));
}

#[test]
fn self_play_reaches_a_result_without_corrupting_the_board() {
    let engine = AIEngine::new();
    let mut board = Board::new();
    let mut color = Stone::Black;
    let mut winner = None;

    for _ in 0..225 {
        let Some(mv) = engine.get_move(&board, color) else {
            break;
        };
        assert!(board.is_empty(mv), "engine chose occupied {mv}");
        board.place_stone(mv, color);
        if check_win(&board, mv, color) {
            winner = Some(color);
            break;
        }
        color = color.opponent();
    }

    match winner {
        Some(color) => {
            let cells = winning_line(&board);
            assert!(cells.len() >= 5);
            assert!(cells.iter().all(|&p| board.get(p) == color));
        }
        None => assert!(board.is_full()),
    }
}

#[test]
fn machine_takes_the_win_over_blocking() {
    let mut board = Board::new();
    place_row(&mut board, 2, 0..4, Stone::White);
    place_row(&mut board, 10, 5..8, Stone::Black);
    assert_eq!(choose_move(&board, Stone::White), Some(Pos::new(2, 4)));
}
