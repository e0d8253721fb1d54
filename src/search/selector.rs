//! Depth-1 move selection
//!
//! Every candidate is scored once with [`evaluate`]; the first candidate
//! reaching the highest score wins. Candidates arrive nearest-first, so ties
//! go to the cell closest to the existing stones.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

use super::candidates::candidates;

/// Winning candidate of a selection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub pos: Pos,
    pub score: i32,
    /// Candidates scored to reach the decision
    pub evaluated: usize,
}

/// Pick the best of `cells` for `mover`, keeping the first on ties.
pub fn select_best<I>(board: &Board, cells: I, mover: Stone) -> Option<Selection>
where
    I: IntoIterator<Item = Pos>,
{
    let mut best: Option<Selection> = None;
    let mut evaluated = 0;

    for pos in cells {
        let score = evaluate(board, pos, mover);
        evaluated += 1;
        // Strictly greater: earlier candidates keep ties
        if best.map_or(true, |b| score > b.score) {
            best = Some(Selection {
                pos,
                score,
                evaluated: 0,
            });
        }
    }

    best.map(|b| Selection { evaluated, ..b })
}

/// Best move for `mover`, or `None` when no stone is on the board to play near
#[must_use]
pub fn choose_move(board: &Board, mover: Stone) -> Option<Pos> {
    select_best(board, candidates(board), mover).map(|s| s.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;

    #[test]
    fn test_empty_board_returns_none() {
        assert_eq!(choose_move(&Board::new(), Stone::Black), None);
    }

    #[test]
    fn test_completes_own_five() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(7, 2), Stone::Black);
        assert_eq!(choose_move(&board, Stone::White), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_blocks_open_four() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(3, 3), Stone::White);
        let mv = choose_move(&board, Stone::White);
        assert!(mv == Some(Pos::new(7, 4)) || mv == Some(Pos::new(7, 9)), "{mv:?}");
    }

    #[test]
    fn test_tie_prefers_nearest_candidate() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);

        let cands = candidates(&board);
        let scores: Vec<i32> = cands.iter().map(|&p| evaluate(&board, p, Stone::White)).collect();
        let max = *scores.iter().max().unwrap();
        let first_max = cands[scores.iter().position(|&s| s == max).unwrap()];

        let chosen = choose_move(&board, Stone::White).unwrap();
        assert_eq!(chosen, first_max);

        let dist = |p: Pos| {
            board.occupied().iter_ones().map(|s| s.chebyshev(p)).min().unwrap()
        };
        for (&p, &s) in cands.iter().zip(&scores) {
            if s == max {
                assert!(dist(chosen) <= dist(p));
            }
        }
    }

    #[test]
    fn test_select_best_keeps_first_of_equal_scores() {
        // Mirror-image cells score the same on an empty board
        let board = Board::new();
        let a = Pos::new(7, 5);
        let b = Pos::new(7, 9);
        assert_eq!(evaluate(&board, a, Stone::Black), evaluate(&board, b, Stone::Black));

        let sel = select_best(&board, [a, b], Stone::Black).unwrap();
        assert_eq!(sel.pos, a);
        assert_eq!(sel.evaluated, 2);

        let sel = select_best(&board, [b, a], Stone::Black).unwrap();
        assert_eq!(sel.pos, b);
    }

    #[test]
    fn test_select_best_empty_iter() {
        assert_eq!(select_best(&Board::new(), std::iter::empty(), Stone::White), None);
    }
}
