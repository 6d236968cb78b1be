//! Greedy one-ply selection.

use chess_core::{Board, ConfigError, Move, MoveSelector, Score, SearchError};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DepthOneConfig;
use crate::eval::{material_score, prefers, WeightTable};

/// Plays the move whose resulting position has the best material score.
///
/// White maximises and Black minimises; among equal scores the smallest move in
/// `Move` order wins. With no legal moves the sentinel [`Move::NONE`] is
/// returned and terminal-state detection is left to the caller.
#[derive(Debug, Clone)]
pub struct AlgoLinearDepthOne {
    weights: WeightTable,
}

impl AlgoLinearDepthOne {
    pub const NAME: &'static str = "AlgoLinearDepthOne";

    /// `weights` are Pawn, Rook, Knight, Bishop, Queen.
    pub fn new(weights: &[f64]) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: WeightTable::from_slice(weights)?,
        })
    }

    pub fn from_config(config: &DepthOneConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: config.weights()?,
        })
    }

    pub fn create_from_config<B: Board + 'static>(
        value: &Value,
    ) -> Result<Box<dyn MoveSelector<B>>, ConfigError> {
        let config = DepthOneConfig::from_value(value)?;
        Ok(Box::new(Self::from_config(&config)?))
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn best_move<B: Board>(&self, board: &B) -> Move {
        let mover = board.who_plays_next();
        let mut best: Option<(Move, Score)> = None;

        for (mv, next) in board.valid_moves() {
            let score = material_score(&next, &self.weights);
            trace!(%mv, score, "one-ply candidate");
            match best {
                Some((_, best_score)) if !prefers(mover, score, best_score) => {}
                _ => best = Some((mv, score)),
            }
        }

        match best {
            Some((mv, score)) => {
                debug!(%mv, score, mover = mover.name(), "one-ply choice");
                mv
            }
            None => Move::NONE,
        }
    }
}

impl<B: Board> MoveSelector<B> for AlgoLinearDepthOne {
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError> {
        Ok(self.best_move(board))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
#[path = "depth_one_tests.rs"]
mod depth_one_tests;
