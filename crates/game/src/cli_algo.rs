//! A human player typing moves in coordinate notation.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use chess_core::{Board, ConfigError, Move, MoveSelector, SearchError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Streams default to stdin and stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CliAlgoConfig {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

/// Prompts on `output` and reads one move per line from `input`, asking again
/// until the line is a legal move. End of input yields [`Move::NONE`].
pub struct CliAlgo<R, W> {
    input: R,
    output: W,
}

/// The variant built by the registry, over whichever streams the record names.
pub type StdioCliAlgo = CliAlgo<Box<dyn BufRead + Send>, Box<dyn Write + Send>>;

impl<R: BufRead, W: Write> CliAlgo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn read_move<B: Board>(&mut self, board: &B) -> io::Result<Move> {
        loop {
            write!(self.output, "{} to move: ", board.who_plays_next().name())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                debug!("move input closed");
                return Ok(Move::NONE);
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<Move>() {
                Err(e) => writeln!(self.output, "{e}")?,
                Ok(mv) if board.update_board(mv).is_none() => {
                    writeln!(self.output, "{mv} is not a legal move here")?
                }
                Ok(mv) => return Ok(mv),
            }
        }
    }
}

impl StdioCliAlgo {
    pub const NAME: &'static str = "CliAlgo";

    pub fn from_config(config: &CliAlgoConfig) -> Result<Self, ConfigError> {
        let input: Box<dyn BufRead + Send> = match &config.input_file {
            Some(path) => Box::new(BufReader::new(
                File::open(path).map_err(|e| io_option("InputFile", e))?,
            )),
            None => Box::new(BufReader::new(io::stdin())),
        };
        let output: Box<dyn Write + Send> = match &config.output_file {
            Some(path) => Box::new(File::create(path).map_err(|e| io_option("OutputFile", e))?),
            None => Box::new(io::stdout()),
        };
        Ok(CliAlgo { input, output })
    }

    pub fn create_from_config<B: Board + 'static>(
        value: &Value,
    ) -> Result<Box<dyn MoveSelector<B>>, ConfigError> {
        let config: CliAlgoConfig = serde_json::from_value(value.clone())?;
        Ok(Box::new(Self::from_config(&config)?))
    }
}

fn io_option(field: &'static str, e: io::Error) -> ConfigError {
    ConfigError::InvalidOption {
        field,
        reason: e.to_string(),
    }
}

impl<B, R, W> MoveSelector<B> for CliAlgo<R, W>
where
    B: Board,
    R: BufRead + Send,
    W: Write + Send,
{
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError> {
        self.read_move(board).map_err(|e| SearchError::Input(e.to_string()))
    }

    fn name(&self) -> &str {
        StdioCliAlgo::NAME
    }
}

#[cfg(test)]
#[path = "cli_algo_tests.rs"]
mod cli_algo_tests;
