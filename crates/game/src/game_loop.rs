//! One game between two selectors.

use std::fmt;
use std::io::{self, Write};

use chess_core::{Board, Color, Move, MoveSelector, SearchError};
use tracing::{info, warn};

use crate::render::{BoardView, RenderStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate { stuck: Color },
    MoveLimit,
    /// The player returned a move outside the legal set, which forfeits.
    InvalidMove { player: Color, mv: Move },
    /// The player's selector failed twice in a row.
    Aborted { player: Color, error: SearchError },
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Check mate!\n{} wins!", winner.name()),
            GameOutcome::Stalemate { stuck } => {
                write!(f, "{} is stuck on stale mate!\nIt's a draw!", stuck.name())
            }
            GameOutcome::MoveLimit => write!(f, "Move limit reached."),
            GameOutcome::InvalidMove { player, mv } => {
                write!(f, "{} played invalid move {mv}.", player.name())
            }
            GameOutcome::Aborted { player, error } => {
                write!(f, "{} failed twice in a row: {error}", player.name())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord<B> {
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
    pub final_board: B,
}

#[derive(Debug, Clone, Default)]
pub struct GameRunner {
    max_moves: Option<usize>,
    style: RenderStyle,
}

impl GameRunner {
    pub fn new(max_moves: Option<usize>) -> Self {
        Self {
            max_moves,
            style: RenderStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Plays from `start` until the game ends, writing the board before every
    /// ply and each move played to `out`.
    pub fn play<'a, B: Board, W: Write>(
        &self,
        start: B,
        white: &'a mut dyn MoveSelector<B>,
        black: &'a mut dyn MoveSelector<B>,
        out: &mut W,
    ) -> io::Result<GameRecord<B>> {
        let mut board = start;
        let mut moves = Vec::new();
        let mut failed = false;

        let outcome = loop {
            let mover = board.who_plays_next();
            writeln!(out, "#{}  {} to play", moves.len(), mover.name())?;
            write!(out, "{}", BoardView::new(&board, self.style))?;

            if board.is_checkmate() {
                break GameOutcome::Checkmate {
                    winner: mover.other(),
                };
            }
            if board.is_stalemate() {
                break GameOutcome::Stalemate { stuck: mover };
            }
            if self.max_moves.is_some_and(|limit| moves.len() >= limit) {
                break GameOutcome::MoveLimit;
            }

            let selector = match mover {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let mv = match selector.next_move(&board) {
                Ok(mv) => mv,
                Err(error) => {
                    writeln!(out, "Error: {error}")?;
                    warn!(
                        player = mover.name(),
                        algo = selector.name(),
                        %error,
                        "selector failed"
                    );
                    if failed {
                        break GameOutcome::Aborted {
                            player: mover,
                            error,
                        };
                    }
                    failed = true;
                    continue;
                }
            };
            failed = false;

            let Some(next) = board.valid_moves().remove(&mv) else {
                break GameOutcome::InvalidMove { player: mover, mv };
            };
            writeln!(out, "Move: {mv}")?;
            info!(
                ply = moves.len() + 1,
                player = mover.name(),
                algo = selector.name(),
                %mv,
                "move played"
            );
            moves.push(mv);
            board = next;
        };

        writeln!(out, "{outcome}")?;
        info!(plies = moves.len(), %outcome, "game over");
        Ok(GameRecord {
            outcome,
            moves,
            final_board: board,
        })
    }
}

#[cfg(test)]
#[path = "game_loop_tests.rs"]
mod game_loop_tests;
