//! Breadth-pruned two-ply adversarial selection.
//!
//! Candidates are ranked by the positional score of the position they lead to;
//! only the best `breadth` survive. Each survivor is then judged by the score
//! after the opponent's best one-ply reply, and the survivor whose reply score is
//! best for the mover is played.

use std::collections::BTreeMap;

use chess_core::{Board, ConfigError, Move, MoveSelector, Score, SearchError};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DepthTwoConfig;
use crate::eval::{positional_score, prefers, WeightTable};

/// Magnitude used for a position whose side to move has no reply. It must
/// dominate any reachable material score.
pub const SCORE_MAX: Score = 1e8;

struct Candidate<B> {
    mv: Move,
    board: B,
    score: Score,
}

#[derive(Debug, Clone)]
pub struct AlgoLinearDepthTwoExt {
    breadth: usize,
    weights: WeightTable,
}

impl AlgoLinearDepthTwoExt {
    pub const NAME: &'static str = "AlgoLinearDepthTwoExt";

    /// `weights` are Pawn, Rook, Knight, Bishop, Queen.
    pub fn new(breadth: usize, weights: &[f64]) -> Result<Self, ConfigError> {
        if breadth == 0 {
            return Err(ConfigError::NonPositiveBreadth);
        }
        Ok(Self {
            breadth,
            weights: WeightTable::from_slice(weights)?,
        })
    }

    pub fn from_config(config: &DepthTwoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            breadth: config.breadth()?,
            weights: config.weights()?,
        })
    }

    pub fn create_from_config<B: Board + 'static>(
        value: &Value,
    ) -> Result<Box<dyn MoveSelector<B>>, ConfigError> {
        let config = DepthTwoConfig::from_value(value)?;
        Ok(Box::new(Self::from_config(&config)?))
    }

    pub fn breadth(&self) -> usize {
        self.breadth
    }

    fn all_scores<B: Board>(&self, board: &B) -> Vec<Candidate<B>> {
        board
            .valid_moves()
            .into_iter()
            .map(|(mv, next)| {
                let score = positional_score(&next, &self.weights);
                Candidate {
                    mv,
                    board: next,
                    score,
                }
            })
            .collect()
    }

    /// Best one-ply reply for the side to move on `board`, with its score.
    ///
    /// A side with no reply at all scores as a maximal loss for itself, whether
    /// it is mated or stalemated.
    fn find_best_linear_move<B: Board>(&self, board: &B) -> (Move, Score) {
        let mover = board.who_plays_next();
        let mut best: Option<(Move, Score)> = None;
        for c in self.all_scores(board) {
            match best {
                Some((_, s)) if !prefers(mover, c.score, s) => {}
                _ => best = Some((c.mv, c.score)),
            }
        }
        best.unwrap_or((Move::NONE, -SCORE_MAX * mover.sign() as f64))
    }

    /// Candidate moves surviving the first-ply cut, best for the mover first.
    pub fn pruned_candidates<B: Board>(&self, board: &B) -> Vec<(Move, Score)> {
        self.pruned(board)
            .into_iter()
            .map(|c| (c.mv, c.score))
            .collect()
    }

    fn pruned<B: Board>(&self, board: &B) -> Vec<Candidate<B>> {
        let direction = board.who_plays_next().sign() as f64;
        let mut candidates = self.all_scores(board);
        // Stable, so equal scores keep `Move` order.
        candidates.sort_by(|a, b| (direction * b.score).total_cmp(&(direction * a.score)));
        candidates.truncate(self.breadth);
        candidates
    }

    pub fn best_move<B: Board>(&self, board: &B) -> Move {
        let mover = board.who_plays_next();
        let candidates = self.pruned(board);
        if candidates.is_empty() {
            return Move::NONE;
        }

        let replies: BTreeMap<Move, Score> = candidates
            .iter()
            .map(|c| {
                let (reply, score) = self.find_best_linear_move(&c.board);
                trace!(mv = %c.mv, ply1 = c.score, %reply, ply2 = score, "two-ply candidate");
                (c.mv, score)
            })
            .collect();

        let mut best: Option<(Move, Score)> = None;
        for (&mv, &score) in &replies {
            match best {
                Some((_, s)) if !prefers(mover, score, s) => {}
                _ => best = Some((mv, score)),
            }
        }

        let (mv, score) = best.unwrap_or((Move::NONE, 0.0));
        debug!(
            %mv,
            score,
            kept = replies.len(),
            breadth = self.breadth,
            mover = mover.name(),
            "two-ply choice"
        );
        mv
    }
}

impl<B: Board> MoveSelector<B> for AlgoLinearDepthTwoExt {
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError> {
        Ok(self.best_move(board))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
#[path = "depth_two_tests.rs"]
mod depth_two_tests;
