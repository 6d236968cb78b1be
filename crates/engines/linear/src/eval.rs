//! Weighted material evaluation.
//!
//! Scores are White-positive regardless of who is to move. Kings are never
//! weighted.

use chess_core::{Board, Color, ConfigError, PieceType, Score, Square};

/// Per-piece weights, fixed for the lifetime of an algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightTable {
    pub pawn: f64,
    pub rook: f64,
    pub knight: f64,
    pub bishop: f64,
    pub queen: f64,
}

impl WeightTable {
    pub const LEN: usize = 5;

    /// Builds the table from weights in the order Pawn, Rook, Knight, Bishop, Queen.
    pub fn from_slice(weights: &[f64]) -> Result<Self, ConfigError> {
        if weights.len() != Self::LEN {
            return Err(ConfigError::WrongWeightCount {
                expected: Self::LEN,
                actual: weights.len(),
            });
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(ConfigError::InvalidOption {
                field: "weights",
                reason: format!("{bad} is not a positive finite number"),
            });
        }
        Ok(Self {
            pawn: weights[0],
            rook: weights[1],
            knight: weights[2],
            bishop: weights[3],
            queen: weights[4],
        })
    }

    /// An en-passant-capturable pawn weighs the same as any other pawn.
    #[inline]
    pub fn weight(&self, kind: PieceType) -> f64 {
        match kind {
            PieceType::Pawn | PieceType::EnPassantCapturablePawn => self.pawn,
            PieceType::Rook => self.rook,
            PieceType::Knight => self.knight,
            PieceType::Bishop => self.bishop,
            PieceType::Queen => self.queen,
            PieceType::King => 0.0,
        }
    }
}

/// Sum of signed piece weights over the whole board.
pub fn material_score<B: Board>(board: &B, weights: &WeightTable) -> Score {
    Square::all()
        .filter_map(|sq| board.piece(sq))
        .map(|pc| pc.color.sign() as f64 * weights.weight(pc.piece_type))
        .sum()
}

/// Material score where each pawn is worth `1 + pawn_weight * advance` instead of
/// its flat weight, `advance` being the ranks it has moved from its starting rank.
pub fn positional_score<B: Board>(board: &B, weights: &WeightTable) -> Score {
    let mut score = 0.0;
    for sq in Square::all() {
        let Some(pc) = board.piece(sq) else {
            continue;
        };
        let sign = pc.color.sign() as f64;
        if pc.piece_type.is_pawn() {
            let advance = match pc.color {
                Color::White => sq.rank as f64 - 1.0,
                Color::Black => 6.0 - sq.rank as f64,
            };
            score += sign * (1.0 + weights.pawn * advance);
        } else {
            score += sign * weights.weight(pc.piece_type);
        }
    }
    score
}

/// True when `a` is strictly better than `b` for `mover`.
#[inline]
pub fn prefers(mover: Color, a: Score, b: Score) -> bool {
    let direction = mover.sign() as f64;
    direction * (a - b) > 0.0
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
