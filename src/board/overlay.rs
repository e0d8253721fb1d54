//! Read access to cells, with single-cell overrides
//!
//! The evaluator asks "what if this empty cell held a black stone, and what if
//! it held a white one". Instead of writing to the board and restoring it,
//! it reads through a [`WithStone`] view that answers the override for one
//! cell and defers to the board everywhere else. The board is only ever
//! borrowed immutably, so no caller can observe a half-finished evaluation.

use super::{Board, Pos, Stone};

/// Anything that can report the stone at a cell
pub trait StoneGrid {
    fn stone_at(&self, pos: Pos) -> Stone;
}

impl StoneGrid for Board {
    #[inline]
    fn stone_at(&self, pos: Pos) -> Stone {
        self.get(pos)
    }
}

/// Board view with one cell overridden
#[derive(Debug, Clone, Copy)]
pub struct WithStone<'a> {
    board: &'a Board,
    pos: Pos,
    stone: Stone,
}

impl<'a> WithStone<'a> {
    #[inline]
    pub fn new(board: &'a Board, pos: Pos, stone: Stone) -> Self {
        Self { board, pos, stone }
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }
}

impl StoneGrid for WithStone<'_> {
    #[inline]
    fn stone_at(&self, pos: Pos) -> Stone {
        if pos == self.pos {
            self.stone
        } else {
            self.board.get(pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_only_target_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Stone::White);

        let view = board.with_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(view.stone_at(Pos::new(7, 7)), Stone::Black);
        assert_eq!(view.stone_at(Pos::new(3, 3)), Stone::White);
        assert_eq!(view.stone_at(Pos::new(0, 0)), Stone::Empty);

        // The underlying board is untouched
        assert_eq!(board.get(Pos::new(7, 7)), Stone::Empty);
    }

    #[test]
    fn test_override_can_hide_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 5), Stone::Black);
        let view = board.with_stone(Pos::new(5, 5), Stone::Empty);
        assert_eq!(view.stone_at(Pos::new(5, 5)), Stone::Empty);
        assert_eq!(view.board().get(Pos::new(5, 5)), Stone::Black);
    }
}
