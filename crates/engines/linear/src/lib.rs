//! Linear Chess Engines
//!
//! Move selection driven by a weighted material evaluation:
//! - [`AlgoLinearDepthOne`]: greedy one-ply search
//! - [`AlgoLinearDepthTwoExt`]: breadth-pruned two-ply adversarial search
//!   with a pawn-advancement term

mod config;
mod depth_one;
mod depth_two;
mod eval;

pub use config::{DepthOneConfig, DepthTwoConfig};
pub use depth_one::AlgoLinearDepthOne;
pub use depth_two::{AlgoLinearDepthTwoExt, SCORE_MAX};
pub use eval::{material_score, positional_score, prefers, WeightTable};
