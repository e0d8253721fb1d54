//! Candidate cells worth scoring
//!
//! Only empty cells within Chebyshev distance 2 of some stone are
//! considered, nearest first.

use crate::board::{Board, Pos};

/// Farthest a candidate may sit from the nearest stone
pub const MAX_CANDIDATE_DISTANCE: u8 = 2;

/// Chebyshev distance from `pos` to the nearest stone, if any is within `limit`
fn nearest_stone_within(board: &Board, pos: Pos, limit: u8) -> Option<u8> {
    let limit = i32::from(limit);
    (1..=limit).find_map(|ring| {
        let touches = (-ring..=ring).any(|dr| {
            (-ring..=ring).any(|dc| {
                (dr.abs() == ring || dc.abs() == ring)
                    && pos.offset(dr, dc, 1).is_some_and(|p| !board.is_empty(p))
            })
        });
        touches.then_some(ring as u8)
    })
}

/// Empty cells near existing stones, ordered by distance to the nearest
/// stone, then row-major. Empty on an empty board.
pub fn candidates(board: &Board) -> Vec<Pos> {
    let mut scored: Vec<(u8, Pos)> = Pos::all()
        .filter(|&pos| board.is_empty(pos))
        .filter_map(|pos| {
            nearest_stone_within(board, pos, MAX_CANDIDATE_DISTANCE).map(|d| (d, pos))
        })
        .collect();

    // Stable: equal distances keep scan order
    scored.sort_by_key(|&(distance, _)| distance);
    scored.into_iter().map(|(_, pos)| pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, CENTER};

    #[test]
    fn test_empty_board_has_no_candidates() {
        assert!(candidates(&Board::new()).is_empty());
    }

    #[test]
    fn test_single_stone_5x5_block() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);
        let cands = candidates(&board);

        assert_eq!(cands.len(), 24);
        for pos in Pos::all() {
            let d = pos.chebyshev(CENTER);
            match d {
                0 => assert!(!cands.contains(&pos)),
                1 | 2 => assert!(cands.contains(&pos), "{pos} missing"),
                _ => assert!(!cands.contains(&pos), "{pos} at distance {d}"),
            }
        }
    }

    #[test]
    fn test_ordered_by_distance_then_scan() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);
        let cands = candidates(&board);

        let (ring1, ring2) = cands.split_at(8);
        assert!(ring1.iter().all(|p| p.chebyshev(CENTER) == 1));
        assert!(ring2.iter().all(|p| p.chebyshev(CENTER) == 2));
        assert!(ring1.windows(2).all(|w| w[0] < w[1]));
        assert!(ring2.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ring1[0], Pos::new(6, 6));
    }

    #[test]
    fn test_uses_nearest_of_several_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 4), Stone::White);
        let cands = candidates(&board);

        // (0, 2) is two from both stones; (0, 3) is one from the white stone
        let idx = |p: Pos| cands.iter().position(|&c| c == p);
        assert!(idx(Pos::new(0, 3)) < idx(Pos::new(0, 2)));
        assert!(!cands.contains(&Pos::new(0, 7)));
        assert!(cands.contains(&Pos::new(2, 6)));
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new();
        for pos in Pos::all() {
            board.place_stone(pos, Stone::White);
        }
        assert!(candidates(&board).is_empty());
    }
}
