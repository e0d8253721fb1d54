//! Wuziqi: freestyle Gomoku with a heuristic machine opponent
//!
//! - Standard 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - Black moves first
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards and overlay views
//! - [`rules`]: Win detection and move legality
//! - [`eval`]: Single-cell attack/defense heuristic
//! - [`search`]: Candidate generation and depth-1 move selection
//! - [`engine`]: Machine opponent with opening policy
//! - [`ui`]: egui front-end and the game session
//!
//! # Quick Start
//!
//! ```
//! use wuziqi::{AIEngine, Board, Stone, Pos};
//!
//! let mut board = Board::new();
//! let engine = AIEngine::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType};
pub use rules::{check_win, winning_line};
pub use search::choose_move;
