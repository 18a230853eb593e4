//! Position evaluation

pub mod heuristic;
pub mod scores;

pub use heuristic::{evaluate, evaluate_midgame, evaluate_opening};
pub use scores::Score;
