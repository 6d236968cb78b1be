//! Text rendering of any [`Board`] for the terminal.

use std::fmt;

use chess_core::fen::piece_char;
use chess_core::{Board, Color, Piece, PieceType, Square};

const LIGHT_SQUARE: &str = "\x1b[48;5;180m";
const DARK_SQUARE: &str = "\x1b[48;5;137m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStyle {
    /// ANSI background colors for the squares.
    pub terminal_colors: bool,
    /// Chess symbols instead of FEN letters.
    pub unicode: bool,
}

fn unicode_char(p: Piece) -> char {
    match (p.color, p.piece_type) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, _) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, _) => '♟',
    }
}

/// A board formatted for the terminal, rank 8 first as seen by White.
pub struct BoardView<'a, B> {
    board: &'a B,
    style: RenderStyle,
}

impl<'a, B: Board> BoardView<'a, B> {
    pub fn new(board: &'a B, style: RenderStyle) -> Self {
        Self { board, style }
    }
}

impl<B: Board> fmt::Display for BoardView<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let ch = match self.board.piece(Square::new(rank, file)) {
                    Some(p) if self.style.unicode => unicode_char(p),
                    Some(p) => piece_char(p),
                    None => '.',
                };
                if self.style.terminal_colors {
                    let bg = if (rank + file) % 2 == 0 {
                        DARK_SQUARE
                    } else {
                        LIGHT_SQUARE
                    };
                    write!(f, "{bg} {ch}{RESET}")?;
                } else {
                    write!(f, " {ch}")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

pub fn render_board<B: Board>(board: &B, style: RenderStyle) -> String {
    BoardView::new(board, style).to_string()
}
