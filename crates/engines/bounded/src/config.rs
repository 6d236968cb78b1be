use chess_core::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DumboConfig {
    /// Plies below the root that may be registered.
    pub max_depth: i64,
    /// Upper bound on distinct states registered per search.
    pub max_num_states: i64,
    /// Static scores are clamped to `[-max_score, max_score]`; a mated side
    /// scores the full magnitude against itself.
    pub max_score: f64,
    pub pawn_score: f64,
    pub rook_score: f64,
    pub knight_score: f64,
    pub bishop_score: f64,
    pub queen_score: f64,
    /// Bonus per legal reply available to the side to move.
    pub valid_move_score: f64,
}

impl Default for DumboConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_num_states: 1_000_000,
            max_score: 10_000.0,
            pawn_score: 1.0,
            rook_score: 5.0,
            knight_score: 3.0,
            bishop_score: 3.0,
            queen_score: 8.0,
            valid_move_score: 1.0,
        }
    }
}

impl DumboConfig {
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(invalid("MaxDepth", format!("{} is below 1", self.max_depth)));
        }
        if self.max_num_states < 1 {
            return Err(invalid(
                "MaxNumStates",
                format!("{} is below 1", self.max_num_states),
            ));
        }
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(invalid(
                "MaxScore",
                format!("{} is not a positive finite number", self.max_score),
            ));
        }
        let weights = [
            ("PawnScore", self.pawn_score),
            ("RookScore", self.rook_score),
            ("KnightScore", self.knight_score),
            ("BishopScore", self.bishop_score),
            ("QueenScore", self.queen_score),
            ("ValidMoveScore", self.valid_move_score),
        ];
        for (field, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(invalid(field, format!("{w} is not a non-negative finite number")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidOption { field, reason }
}
