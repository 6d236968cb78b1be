//! Bounded Exhaustive Search
//!
//! [`AlgoDumbo`] explores the game tree breadth first up to a ply limit and a
//! global state budget, scoring every registered state once with a material
//! plus mobility evaluator and backing the scores up with minimax.

mod config;
mod search;
mod state;

pub use config::DumboConfig;
pub use search::{comparator_for_color, AlgoDumbo, Comparator, SearchOutcome};
pub use state::StateKey;
