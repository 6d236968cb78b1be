//! Forsyth-Edwards Notation import for the mailbox board.
//!
//! Only the first four fields matter to the rules engine; the move counters
//! are validated when present and otherwise ignored.

use crate::error::FenError;
use crate::mailbox::{CastlingRights, MailboxBoard};
use crate::types::*;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn piece_char(p: Piece) -> char {
    let ch = match p.piece_type {
        PieceType::Pawn | PieceType::EnPassantCapturablePawn => 'p',
        PieceType::Rook => 'r',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };
    match p.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

fn piece_from_char(ch: char) -> Result<Piece, FenError> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return Err(FenError::BadPiece(ch)),
    };
    Ok(Piece::new(kind, color))
}

impl MailboxBoard {
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        let mut board = MailboxBoard::empty(side_to_move);

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as usize;
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as usize + 1,
                        files: file + 1,
                    });
                }
                let idx = Square::new(rank, file as u8).idx();
                board.squares[idx] = Some(piece_from_char(ch)?);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as usize + 1,
                    files: file,
                });
            }
        }

        let mut castling = CastlingRights::default();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }
        board.castling = castling;

        if parts[3] != "-" {
            let target: Square = parts[3]
                .parse()
                .map_err(|_| FenError::EnPassant(parts[3].to_string()))?;
            let expected_rank = match side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if target.rank != expected_rank {
                return Err(FenError::EnPassant(parts[3].to_string()));
            }
            board.en_passant = Some(target.idx() as u8);
        }

        for counter in parts.iter().skip(4).take(2) {
            counter
                .parse::<u32>()
                .map_err(|_| FenError::Clock(counter.to_string()))?;
        }

        Ok(board)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
