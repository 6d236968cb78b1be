//! Game harness for the move selectors
//!
//! - [`AlgoFactory`]: name-keyed registry building selectors from JSON records
//! - [`CliAlgo`]: a human player reading coordinate moves from a stream
//! - [`GameConfig`]: the game configuration file and its command-line overrides
//! - [`GameRunner`]: plays one game between two selectors

mod cli_algo;
mod config;
mod factory;
mod game_loop;
mod render;

pub use cli_algo::{CliAlgo, CliAlgoConfig, StdioCliAlgo};
pub use config::{GameConfig, GameConfigError, BLACK_ALGO_FIELD, WHITE_ALGO_FIELD};
pub use factory::{AlgoFactory, AlgoMachine, ALGO_NAME_FIELD};
pub use game_loop::{GameOutcome, GameRecord, GameRunner};
pub use render::{render_board, BoardView, RenderStyle};
