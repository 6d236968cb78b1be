//! Configuration schemas for the linear selectors.
//!
//! Field names serialize in PascalCase (`PawnWeight`, `Breadth`, ...) and every
//! field has a default, so a record only needs to name what it overrides.

use chess_core::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::eval::WeightTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepthOneConfig {
    pub pawn_weight: f64,
    pub rook_weight: f64,
    pub knight_weight: f64,
    pub bishop_weight: f64,
    pub queen_weight: f64,
}

impl Default for DepthOneConfig {
    fn default() -> Self {
        Self {
            pawn_weight: 1.0,
            rook_weight: 5.0,
            knight_weight: 3.0,
            bishop_weight: 3.0,
            queen_weight: 9.0,
        }
    }
}

impl DepthOneConfig {
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn weights(&self) -> Result<WeightTable, ConfigError> {
        WeightTable::from_slice(&[
            self.pawn_weight,
            self.rook_weight,
            self.knight_weight,
            self.bishop_weight,
            self.queen_weight,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepthTwoConfig {
    pub pawn_weight: f64,
    pub rook_weight: f64,
    pub knight_weight: f64,
    pub bishop_weight: f64,
    pub queen_weight: f64,
    /// Candidates kept after the first ply. Signed so that negative input is
    /// rejected by validation instead of failing to parse.
    pub breadth: i64,
}

impl Default for DepthTwoConfig {
    fn default() -> Self {
        Self {
            pawn_weight: 1.0,
            rook_weight: 9.0,
            knight_weight: 7.0,
            bishop_weight: 7.0,
            queen_weight: 15.0,
            breadth: 6,
        }
    }
}

impl DepthTwoConfig {
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn weights(&self) -> Result<WeightTable, ConfigError> {
        WeightTable::from_slice(&[
            self.pawn_weight,
            self.rook_weight,
            self.knight_weight,
            self.bishop_weight,
            self.queen_weight,
        ])
    }

    pub fn breadth(&self) -> Result<usize, ConfigError> {
        if self.breadth <= 0 {
            return Err(ConfigError::NonPositiveBreadth);
        }
        usize::try_from(self.breadth).map_err(|e| ConfigError::InvalidOption {
            field: "Breadth",
            reason: e.to_string(),
        })
    }
}
