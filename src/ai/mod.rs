//! The AI opponent: windowed heuristic evaluation, minimax search with
//! alpha-beta pruning, and the difficulty setting surfaced to the UI.

mod difficulty;
mod heuristic;
mod minimax;

pub use difficulty::Difficulty;
pub use heuristic::evaluate_board;
pub use minimax::{best_move, minimax};
