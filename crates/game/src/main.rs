//! space-chess
//!
//! Plays one game between two configured move selectors in the terminal.
//! Either side may be a human (`CliAlgo`) typing moves such as `e2e4`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::MailboxBoard;
use clap::Parser;
use game::{AlgoFactory, GameConfig, GameRunner, RenderStyle, BLACK_ALGO_FIELD, WHITE_ALGO_FIELD};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "space-chess")]
#[command(about = "Space chess command line game engine")]
struct Args {
    /// Game configuration file (JSON, or TOML with a .toml extension)
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Algorithm playing White
    #[arg(long)]
    white_algo: Option<String>,

    /// Algorithm playing Black
    #[arg(long)]
    black_algo: Option<String>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies
    #[arg(long)]
    max_moves: Option<usize>,

    /// Color the board squares
    #[arg(long)]
    color: bool,

    /// Draw pieces with chess symbols
    #[arg(long)]
    unicode: bool,

    /// List registered algorithms and exit
    #[arg(long)]
    list_algos: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config_file {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading game configuration {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(name) = &self.white_algo {
            config.set_white_algo(name);
        }
        if let Some(name) = &self.black_algo {
            config.set_black_algo(name);
        }
        if self.fen.is_some() {
            config.fen = self.fen.clone();
        }
        if self.max_moves.is_some() {
            config.max_moves = self.max_moves;
        }
        config.terminal_colors |= self.color;
        config.unicode |= self.unicode;
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let factory = AlgoFactory::<MailboxBoard>::with_defaults();
    if args.list_algos {
        for name in factory.algo_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = args.game_config()?;
    let board = match &config.fen {
        Some(fen) => MailboxBoard::from_fen(fen).with_context(|| format!("parsing FEN {fen:?}"))?,
        None => MailboxBoard::starting_board(),
    };

    let mut white = factory
        .try_create(&config.white_algo)
        .with_context(|| format!("creating {WHITE_ALGO_FIELD} from {}", config.white_algo))?;
    let mut black = factory
        .try_create(&config.black_algo)
        .with_context(|| format!("creating {BLACK_ALGO_FIELD} from {}", config.black_algo))?;
    info!(white = white.name(), black = black.name(), "starting game");

    let runner = GameRunner::new(config.max_moves).with_style(RenderStyle {
        terminal_colors: config.terminal_colors,
        unicode: config.unicode,
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner
        .play(board, white.as_mut(), black.as_mut(), &mut out)
        .context("writing game output")?;
    Ok(())
}
