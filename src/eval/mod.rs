//! Evaluation module for candidate cells
//!
//! The evaluation considers:
//! - Runs through the cell for the mover (attack) and the opponent (defense)
//! - Open ends of each run
//! - Positional bias toward the center

pub mod heuristic;
pub mod patterns;

pub use heuristic::{analyze_run, center_bias, evaluate, RunAnalysis};
pub use patterns::{score_for, PatternScore, Role};
