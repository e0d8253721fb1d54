//! Machine opponent
//!
//! Wraps the single-ply selector with an opening policy:
//!
//! 1. **Opening**: on an empty board there is nothing to play near, so the
//!    engine plays its configured opening cell (the center by default)
//! 2. **Heuristic**: otherwise every candidate near the stones is scored and
//!    the best one is played
//!
//! # Example
//!
//! ```
//! use wuziqi::{AIEngine, Board, Stone, Pos};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone, CENTER};
use crate::search::{candidates, select_best};

/// Which rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Fixed opening cell on an empty board
    Opening,
    /// Best-scoring candidate
    Heuristic,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Heuristic score of the chosen cell (0 for the opening move)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Candidates evaluated
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn heuristic(best_move: Option<Pos>, score: i32, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move,
            score,
            search_type: SearchType::Heuristic,
            time_ms,
            nodes,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Cell played when the board is empty
    pub opening_move: Pos,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_move: CENTER,
        }
    }
}

/// Heuristic Gomoku opponent.
///
/// Stateless between calls: the same board and color always give the same move.
///
/// # Example
///
/// ```
/// use wuziqi::{AIEngine, Board, Stone, Pos};
///
/// let engine = AIEngine::new();
/// let board = Board::new();
/// assert_eq!(engine.get_move(&board, Stone::Black), Some(Pos::new(7, 7)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `color`, or `None` when the board is full.
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move with statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = || start.elapsed().as_millis() as u64;

        if board.is_board_empty() {
            let pos = self.config.opening_move;
            debug!(color = color.name(), %pos, "opening move");
            return MoveResult::opening(pos, elapsed_ms());
        }

        match select_best(board, candidates(board), color) {
            Some(sel) => {
                debug!(
                    color = color.name(),
                    pos = %sel.pos,
                    score = sel.score,
                    candidates = sel.evaluated,
                    "heuristic move"
                );
                MoveResult::heuristic(Some(sel.pos), sel.score, elapsed_ms(), sel.evaluated as u64)
            }
            None => {
                debug!(color = color.name(), "no candidate moves");
                MoveResult::heuristic(None, 0, elapsed_ms(), 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::choose_move;

    #[test]
    fn test_engine_empty_board_plays_center() {
        let engine = AIEngine::new();
        let result = engine.get_move_with_stats(&Board::new(), Stone::Black);
        assert_eq!(result.best_move, Some(CENTER));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_custom_opening() {
        let engine = AIEngine::with_config(EngineConfig {
            opening_move: Pos::new(3, 3),
        });
        assert_eq!(engine.config().opening_move, Pos::new(3, 3));
        assert_eq!(engine.get_move(&Board::new(), Stone::White), Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_engine_matches_selector() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);
        board.place_stone(Pos::new(6, 8), Stone::White);
        board.place_stone(Pos::new(8, 8), Stone::Black);

        let engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Stone::White);
        assert_eq!(result.search_type, SearchType::Heuristic);
        assert_eq!(result.best_move, choose_move(&board, Stone::White));
        assert_eq!(result.nodes as usize, candidates(&board).len());
    }

    #[test]
    fn test_engine_full_board_no_move() {
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            board.place_stone(pos, if (i / 2) % 2 == 0 { Stone::Black } else { Stone::White });
        }
        let result = AIEngine::new().get_move_with_stats(&board, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let engine = AIEngine::new();
        assert_eq!(
            engine.get_move(&board, Stone::White),
            engine.get_move(&board, Stone::White)
        );
    }

    #[test]
    fn test_engine_alternating_colors() {
        let engine = AIEngine::new();
        let mut board = Board::new();
        let mut color = Stone::Black;

        for _ in 0..6 {
            let mv = engine.get_move(&board, color).unwrap();
            assert!(board.is_empty(mv));
            board.place_stone(mv, color);
            color = color.opponent();
        }
        assert_eq!(board.stone_count(), 6);
    }
}
