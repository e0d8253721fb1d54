//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe, plus the
//! headless game session it drives.

mod app;
mod board_view;
pub mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameOutcome, GameResult, GameState, PlaceError, SessionConfig};
