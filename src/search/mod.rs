//! Move search for the machine opponent
//!
//! Contains:
//! - Candidate generation near existing stones
//! - Single-ply selection of the best-scoring candidate

pub mod candidates;
pub mod selector;

pub use candidates::{candidates, MAX_CANDIDATE_DISTANCE};
pub use selector::{choose_move, select_best, Selection};
