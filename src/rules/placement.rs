//! Move legality for external input

use thiserror::Error;

use crate::board::{Board, Pos};

/// Why a requested coordinate cannot take a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("{0} is already occupied")]
    Occupied(Pos),
}

/// Check that a cell is on the board and empty
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// Validate raw coordinates, returning the position to play
pub fn validate_move(board: &Board, row: i32, col: i32) -> Result<Pos, MoveError> {
    let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !is_valid_move(board, pos) {
        return Err(MoveError::Occupied(pos));
    }
    Ok(pos)
}
