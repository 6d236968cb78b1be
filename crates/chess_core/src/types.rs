use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;

/// Position score. Positive favours White, negative favours Black.
pub type Score = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// +1 for White, -1 for Black. Scores are always White-positive.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceType {
    Pawn,
    /// A pawn that has just made a double step and may be taken en passant.
    EnPassantCapturablePawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::EnPassantCapturablePawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn is_pawn(self) -> bool {
        matches!(self, PieceType::Pawn | PieceType::EnPassantCapturablePawn)
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }
}

/// Zero-indexed board coordinate. Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8, "square out of range");
        Self { rank, file }
    }

    /// Every square, rank by rank from rank 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    pub fn idx(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn from_idx(idx: u8) -> Self {
        Self {
            rank: idx / 8,
            file: idx % 8,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'1' + self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(ParseMoveError(s.to_string()));
        }
        Ok(Square::new(b[1] - b'1', b[0] - b'a'))
    }
}

/// A move as a (source, destination) coordinate pair.
///
/// The derived ordering compares source rank, source file, destination rank and
/// destination file in that order; move maps iterate in this order and several
/// selectors rely on it for tie-breaking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub source_rank: u8,
    pub source_file: u8,
    pub destination_rank: u8,
    pub destination_file: u8,
}

impl Move {
    /// "No move available". Never legal because source equals destination.
    pub const NONE: Move = Move {
        source_rank: 0,
        source_file: 0,
        destination_rank: 0,
        destination_file: 0,
    };

    pub fn new(from: Square, to: Square) -> Self {
        Self {
            source_rank: from.rank,
            source_file: from.file,
            destination_rank: to.rank,
            destination_file: to.file,
        }
    }

    pub fn source(self) -> Square {
        Square::new(self.source_rank, self.source_file)
    }

    pub fn destination(self) -> Square {
        Square::new(self.destination_rank, self.destination_file)
    }

    pub fn is_none(self) -> bool {
        self == Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.source(), self.destination())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses coordinate notation such as `e2e4`. A trailing promotion letter is
    /// accepted and ignored since promotion is always to a queen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(ParseMoveError(s.to_string()));
        }
        let from: Square = s[0..2].parse().map_err(|_| ParseMoveError(s.to_string()))?;
        let to: Square = s[2..4].parse().map_err(|_| ParseMoveError(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
