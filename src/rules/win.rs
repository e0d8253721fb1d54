//! Five-in-a-row detection
//!
//! Runs are counted by walking outward from a cell along each axis until the
//! board edge or a cell of another color. Overlines (six or more) win.

use std::collections::BTreeSet;

use crate::board::{Axis, Board, Pos, Stone, StoneGrid};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Length of the run of `color` through `pos` along `axis`, counting `pos` itself
#[inline]
pub fn run_length<G: StoneGrid>(grid: &G, pos: Pos, axis: Axis, color: Stone) -> usize {
    1 + axis
        .directions()
        .iter()
        .map(|&(dr, dc)| stretch(grid, pos, dr, dc, color).len())
        .sum::<usize>()
}

/// Consecutive `color` cells beyond `pos` in one direction, nearest first
fn stretch<G: StoneGrid>(grid: &G, pos: Pos, dr: i32, dc: i32, color: Stone) -> Vec<Pos> {
    (1..)
        .map_while(|step| pos.offset(dr, dc, step))
        .take_while(|&p| grid.stone_at(p) == color)
        .collect()
}

/// Fast five-in-a-row check for a stone just placed at `pos`.
///
/// Only checks the 4 axes through `pos`; the stone at `pos` is counted as
/// `color` whatever the board holds there.
#[inline]
pub fn check_win<G: StoneGrid>(grid: &G, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    Axis::ALL
        .iter()
        .any(|&axis| run_length(grid, pos, axis, color) >= WIN_LENGTH)
}

/// Every cell belonging to some run of five or more, of either color.
///
/// Crossing lines share cells; the set holds each cell once.
pub fn winning_line(board: &Board) -> BTreeSet<Pos> {
    let mut cells = BTreeSet::new();

    for pos in board.occupied().iter_ones() {
        let color = board.get(pos);
        for axis in Axis::ALL {
            let [(fr, fc), (br, bc)] = axis.directions();
            let forward = stretch(board, pos, fr, fc, color);
            let backward = stretch(board, pos, br, bc, color);
            if 1 + forward.len() + backward.len() >= WIN_LENGTH {
                cells.insert(pos);
                cells.extend(forward);
                cells.extend(backward);
            }
        }
    }

    cells
}

/// Color owning a five anywhere on the board
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White].into_iter().find(|&color| {
        board
            .stones(color)
            .is_some_and(|stones| stones.iter_ones().any(|pos| check_win(board, pos, color)))
    })
}
