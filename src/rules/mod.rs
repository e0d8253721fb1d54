//! Game rules for freestyle Gomoku
//!
//! - Five or more in a row wins (overlines allowed)
//! - Any empty on-board cell is a legal move

pub mod placement;
pub mod win;

// Re-exports for convenient access
pub use placement::{is_valid_move, validate_move, MoveError};
pub use win::{check_win, check_winner, run_length, winning_line};
