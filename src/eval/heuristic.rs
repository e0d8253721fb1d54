//! Single-cell heuristic for move selection
//!
//! A candidate cell is worth the sum, over the four axes, of
//! - the run the mover would form by playing there (attack), and
//! - the run the opponent would form by playing there, i.e. what the cell
//!   is worth to block (defense),
//!
//! plus a penalty for distance from the center. Simultaneous threats on
//! several axes add up rather than taking the strongest one.

use crate::board::{Axis, Board, Pos, Stone, StoneGrid, CENTER};

use super::patterns::{score_for, Role};

/// Score lost per Manhattan step away from the center
pub const CENTER_WEIGHT: i32 = 10;

/// Run of one color through an origin cell along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunAnalysis {
    /// Stones in the run, origin included (always >= 1)
    pub count: u8,
    /// Empty on-board cells just past either end (0..=2)
    pub open_ends: u8,
}

impl RunAnalysis {
    #[inline]
    pub fn score(self, role: Role) -> i32 {
        score_for(self.count, self.open_ends, role)
    }
}

/// Measure the run of `color` through `origin` along `axis`.
///
/// The origin itself is counted as `color` without being read, so callers
/// pass a view where it already holds the hypothetical stone.
#[allow(clippy::cast_possible_truncation)]
pub fn analyze_run<G: StoneGrid>(grid: &G, origin: Pos, axis: Axis, color: Stone) -> RunAnalysis {
    let mut count = 1u8;
    let mut open_ends = 0u8;

    for (dr, dc) in axis.directions() {
        let mut step = 1;
        let beyond = loop {
            match origin.offset(dr, dc, step) {
                Some(p) if grid.stone_at(p) == color => {
                    count += 1;
                    step += 1;
                }
                other => break other,
            }
        };
        if beyond.is_some_and(|p| grid.stone_at(p) == Stone::Empty) {
            open_ends += 1;
        }
    }

    RunAnalysis { count, open_ends }
}

/// Center preference: 0 at (7, 7), -10 per Manhattan step away
#[inline]
pub fn center_bias(pos: Pos) -> i32 {
    -CENTER_WEIGHT * i32::from(pos.manhattan(CENTER))
}

/// Score playing `mover` at the empty cell `pos`.
///
/// Both hypothetical placements are read through overlay views, so the
/// board is left exactly as it was on every path.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, mover: Stone) -> i32 {
    debug_assert!(board.is_empty(pos), "evaluate called on occupied {pos}");
    debug_assert!(mover != Stone::Empty);

    let opponent = mover.opponent();
    let attack_view = board.with_stone(pos, mover);
    let defense_view = board.with_stone(pos, opponent);

    let pattern_score: i32 = Axis::ALL
        .iter()
        .map(|&axis| {
            let attack = analyze_run(&attack_view, pos, axis, mover);
            let defense = analyze_run(&defense_view, pos, axis, opponent);
            attack.score(Role::Attack) + defense.score(Role::Defense)
        })
        .sum();

    center_bias(pos) + pattern_score
}
