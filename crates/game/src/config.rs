//! Game configuration file.
//!
//! The file is JSON unless its extension is `.toml`. Command-line flags are
//! applied on top of whatever the file provides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::factory::ALGO_NAME_FIELD;

pub const WHITE_ALGO_FIELD: &str = "WhiteAlgo";
pub const BLACK_ALGO_FIELD: &str = "BlackAlgo";

const DEFAULT_WHITE_ALGO: &str = "AlgoLinearDepthTwoExt";
const DEFAULT_BLACK_ALGO: &str = "CliAlgo";

#[derive(Debug, Error)]
pub enum GameConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON game configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML game configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0} must be a table of algorithm options")]
    NotARecord(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameConfig {
    /// Algorithm record for White; its `AlgoName` picks the selector.
    pub white_algo: Value,
    pub black_algo: Value,
    /// Plies after which the game is stopped. `None` plays to the end.
    pub max_moves: Option<usize>,
    /// Starting position in FEN; the standard start when absent.
    pub fen: Option<String>,
    pub terminal_colors: bool,
    pub unicode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_algo: json!({ ALGO_NAME_FIELD: DEFAULT_WHITE_ALGO }),
            black_algo: json!({ ALGO_NAME_FIELD: DEFAULT_BLACK_ALGO }),
            max_moves: None,
            fen: None,
            terminal_colors: false,
            unicode: false,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, GameConfigError> {
        let text = fs::read_to_string(path).map_err(|source| GameConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, GameConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.checked()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, GameConfigError> {
        let config: Self = toml::from_str(text)?;
        config.checked()
    }

    fn checked(self) -> Result<Self, GameConfigError> {
        if !self.white_algo.is_object() {
            return Err(GameConfigError::NotARecord(WHITE_ALGO_FIELD));
        }
        if !self.black_algo.is_object() {
            return Err(GameConfigError::NotARecord(BLACK_ALGO_FIELD));
        }
        Ok(self)
    }

    /// Points White at another algorithm, keeping any options already set.
    pub fn set_white_algo(&mut self, name: &str) {
        set_algo_name(&mut self.white_algo, name);
    }

    pub fn set_black_algo(&mut self, name: &str) {
        set_algo_name(&mut self.black_algo, name);
    }
}

fn set_algo_name(record: &mut Value, name: &str) {
    match record.as_object_mut() {
        Some(fields) => {
            fields.insert(ALGO_NAME_FIELD.to_string(), Value::from(name));
        }
        None => *record = json!({ ALGO_NAME_FIELD: name }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
