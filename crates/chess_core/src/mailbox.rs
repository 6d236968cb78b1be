//! Reference rules engine: an immutable 8x8 mailbox board.
//!
//! Moves are generated pseudo-legally and filtered by playing each one on a
//! copy and rejecting those that leave the mover's king attacked. Promotion is
//! always to a queen, so a move is fully described by its two squares.

use std::fmt;

use crate::board::{Board, MoveMap};
use crate::fen::piece_char;
use crate::types::*;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    fn king_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    fn queen_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn revoke_square(&mut self, idx: u8) {
        match idx {
            0 => self.wq = false,
            7 => self.wk = false,
            56 => self.bq = false,
            63 => self.bk = false,
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MailboxBoard {
    /// Indexed by `rank * 8 + file`. Pawns are always stored as `PieceType::Pawn`.
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// Square passed over by the pawn that just made a double step.
    pub(crate) en_passant: Option<u8>,
}

fn file_of(idx: u8) -> i8 {
    (idx % 8) as i8
}

fn rank_of(idx: u8) -> i8 {
    (idx / 8) as i8
}

fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

fn mv(from: u8, to: u8) -> Move {
    Move::new(Square::from_idx(from), Square::from_idx(to))
}

impl MailboxBoard {
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            squares: [None; 64],
            side_to_move,
            castling: CastlingRights::default(),
            en_passant: None,
        }
    }

    pub fn starting_board() -> Self {
        let mut b = Self::empty(Color::White);
        b.castling = CastlingRights::ALL;

        let back = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(kind, Color::White));
            b.squares[8 + f] = Some(Piece::new(PieceType::Pawn, Color::White));
            b.squares[48 + f] = Some(Piece::new(PieceType::Pawn, Color::Black));
            b.squares[56 + f] = Some(Piece::new(kind, Color::Black));
        }
        b
    }

    /// Places (or clears) a piece. En-passant markers are stored as plain pawns.
    pub fn with_piece(mut self, square: Square, piece: Option<Piece>) -> Self {
        self.squares[square.idx()] = piece.map(|p| {
            if p.piece_type.is_pawn() {
                Piece::new(PieceType::Pawn, p.color)
            } else {
                p
            }
        });
        self
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    fn at(&self, idx: u8) -> Option<Piece> {
        self.squares[idx as usize]
    }

    fn occupant(&self, file: i8, rank: i8) -> Option<Piece> {
        sq(file, rank).and_then(|s| self.at(s))
    }

    fn en_passant_pawn(&self) -> Option<u8> {
        // The pawn that double-stepped belongs to the side that just moved.
        self.en_passant.map(|target| match self.side_to_move {
            Color::White => target - 8,
            Color::Black => target + 8,
        })
    }

    fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&i| self.at(i) == Some(Piece::new(PieceType::King, c)))
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(k) => self.is_square_attacked(k, c.other()),
            None => false,
        }
    }

    fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        let is = |pc: Option<Piece>, kinds: &[PieceType]| {
            pc.is_some_and(|p| p.color == by && kinds.contains(&p.piece_type))
        };

        // An attacking pawn sits one rank behind the target from its own side.
        let pawn_rank = tr - by.sign() as i8;
        if is(self.occupant(tf - 1, pawn_rank), &[PieceType::Pawn])
            || is(self.occupant(tf + 1, pawn_rank), &[PieceType::Pawn])
        {
            return true;
        }
        if KNIGHT_DELTAS
            .iter()
            .any(|(df, dr)| is(self.occupant(tf + df, tr + dr), &[PieceType::Knight]))
        {
            return true;
        }
        if KING_DELTAS
            .iter()
            .any(|(df, dr)| is(self.occupant(tf + df, tr + dr), &[PieceType::King]))
        {
            return true;
        }

        let sliders = [
            (&DIAGONALS, [PieceType::Bishop, PieceType::Queen]),
            (&ORTHOGONALS, [PieceType::Rook, PieceType::Queen]),
        ];
        for (dirs, kinds) in sliders {
            for (df, dr) in dirs.iter() {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if let Some(pc) = self.at(s) {
                        if is(Some(pc), &kinds) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }
        false
    }

    fn pseudo_moves(&self, out: &mut Vec<Move>) {
        let c = self.side_to_move;
        for from in 0..64u8 {
            let pc = match self.at(from) {
                Some(p) if p.color == c => p,
                _ => continue,
            };
            match pc.piece_type {
                PieceType::Pawn | PieceType::EnPassantCapturablePawn => self.gen_pawn(from, out),
                PieceType::Knight => self.gen_steps(from, &KNIGHT_DELTAS, out),
                PieceType::Bishop => self.gen_slides(from, &DIAGONALS, out),
                PieceType::Rook => self.gen_slides(from, &ORTHOGONALS, out),
                PieceType::Queen => {
                    self.gen_slides(from, &DIAGONALS, out);
                    self.gen_slides(from, &ORTHOGONALS, out);
                }
                PieceType::King => {
                    self.gen_steps(from, &KING_DELTAS, out);
                    self.gen_castles(from, out);
                }
            }
        }
    }

    fn gen_pawn(&self, from: u8, out: &mut Vec<Move>) {
        let c = self.side_to_move;
        let f = file_of(from);
        let r = rank_of(from);
        let dir = c.sign() as i8;
        let start_rank = match c {
            Color::White => 1,
            Color::Black => 6,
        };

        if let Some(to) = sq(f, r + dir) {
            if self.at(to).is_none() {
                out.push(mv(from, to));
                if r == start_rank {
                    if let Some(to2) = sq(f, r + 2 * dir) {
                        if self.at(to2).is_none() {
                            out.push(mv(from, to2));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = sq(f + df, r + dir) {
                match self.at(to) {
                    Some(target) if target.color != c => out.push(mv(from, to)),
                    None if self.en_passant == Some(to) => out.push(mv(from, to)),
                    _ => {}
                }
            }
        }
    }

    fn gen_steps(&self, from: u8, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
        let c = self.side_to_move;
        for (df, dr) in deltas {
            if let Some(to) = sq(file_of(from) + df, rank_of(from) + dr) {
                if self.at(to).is_none_or(|pc| pc.color != c) {
                    out.push(mv(from, to));
                }
            }
        }
    }

    fn gen_slides(&self, from: u8, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        let c = self.side_to_move;
        for (df, dr) in dirs {
            let mut f = file_of(from) + df;
            let mut r = rank_of(from) + dr;
            while let Some(to) = sq(f, r) {
                match self.at(to) {
                    None => out.push(mv(from, to)),
                    Some(pc) => {
                        if pc.color != c {
                            out.push(mv(from, to));
                        }
                        break;
                    }
                }
                f += df;
                r += dr;
            }
        }
    }

    fn gen_castles(&self, from: u8, out: &mut Vec<Move>) {
        let c = self.side_to_move;
        let home = match c {
            Color::White => 4u8,
            Color::Black => 60u8,
        };
        if from != home || self.in_check(c) {
            return;
        }
        let enemy = c.other();
        let rook = Some(Piece::new(PieceType::Rook, c));
        // (right held, rook corner, squares that must be empty, squares the king crosses, destination)
        let options = [
            (
                self.castling.king_side(c),
                home + 3,
                vec![home + 1, home + 2],
                [home + 1, home + 2],
                home + 2,
            ),
            (
                self.castling.queen_side(c),
                home - 4,
                vec![home - 1, home - 2, home - 3],
                [home - 1, home - 2],
                home - 2,
            ),
        ];
        for (allowed, corner, empty, crossed, to) in options {
            if allowed
                && self.at(corner) == rook
                && empty.iter().all(|&s| self.at(s).is_none())
                && crossed.iter().all(|&s| !self.is_square_attacked(s, enemy))
            {
                out.push(mv(from, to));
            }
        }
    }

    /// Plays a pseudo-legal move on a copy. Legality is checked by the caller.
    fn play(&self, m: Move) -> MailboxBoard {
        let from = m.source().idx() as u8;
        let to = m.destination().idx() as u8;
        let mut next = self.clone();
        let moved = match self.at(from) {
            Some(p) => p,
            None => return next,
        };
        let captured = self.at(to);

        next.en_passant = None;
        next.squares[from as usize] = None;
        next.squares[to as usize] = Some(moved);

        if moved.piece_type == PieceType::Pawn {
            if captured.is_none() && file_of(from) != file_of(to) {
                // En passant: the captured pawn sits beside the source square.
                if let Some(cs) = sq(file_of(to), rank_of(from)) {
                    next.squares[cs as usize] = None;
                }
            }
            let last_rank = match moved.color {
                Color::White => 7,
                Color::Black => 0,
            };
            if rank_of(to) == last_rank {
                next.squares[to as usize] = Some(Piece::new(PieceType::Queen, moved.color));
            }
            if (rank_of(to) - rank_of(from)).abs() == 2 {
                next.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
            }
        }

        if moved.piece_type == PieceType::King {
            if (file_of(to) - file_of(from)).abs() == 2 {
                let (rook_from, rook_to) = if file_of(to) > file_of(from) {
                    (from + 3, from + 1)
                } else {
                    (from - 4, from - 1)
                };
                next.squares[rook_to as usize] = next.squares[rook_from as usize].take();
            }
            match moved.color {
                Color::White => {
                    next.castling.wk = false;
                    next.castling.wq = false;
                }
                Color::Black => {
                    next.castling.bk = false;
                    next.castling.bq = false;
                }
            }
        }
        next.castling.revoke_square(from);
        next.castling.revoke_square(to);

        next.side_to_move = self.side_to_move.other();
        next
    }

    fn legal_successor(&self, m: Move) -> Option<MailboxBoard> {
        let next = self.play(m);
        if next.in_check(self.side_to_move) {
            None
        } else {
            Some(next)
        }
    }
}

impl Default for MailboxBoard {
    fn default() -> Self {
        Self::starting_board()
    }
}

impl Board for MailboxBoard {
    fn who_plays_next(&self) -> Color {
        self.side_to_move
    }

    fn piece(&self, square: Square) -> Option<Piece> {
        let pc = self.squares[square.idx()]?;
        if pc.piece_type == PieceType::Pawn && self.en_passant_pawn() == Some(square.idx() as u8) {
            return Some(Piece::new(PieceType::EnPassantCapturablePawn, pc.color));
        }
        Some(pc)
    }

    fn can_castle_left(&self, color: Color) -> bool {
        match color {
            Color::White => self.castling.wq,
            Color::Black => self.castling.bk,
        }
    }

    fn can_castle_right(&self, color: Color) -> bool {
        match color {
            Color::White => self.castling.wk,
            Color::Black => self.castling.bq,
        }
    }

    fn is_stalemate(&self) -> bool {
        self.valid_move_count() == 0 && !self.in_check(self.side_to_move)
    }

    fn is_checkmate(&self) -> bool {
        self.valid_move_count() == 0 && self.in_check(self.side_to_move)
    }

    fn update_board(&self, m: Move) -> Option<Self> {
        let mut pseudo = Vec::with_capacity(64);
        self.pseudo_moves(&mut pseudo);
        if !pseudo.contains(&m) {
            return None;
        }
        self.legal_successor(m)
    }

    fn valid_moves(&self) -> MoveMap<Self> {
        let mut pseudo = Vec::with_capacity(64);
        self.pseudo_moves(&mut pseudo);
        pseudo
            .into_iter()
            .filter_map(|m| self.legal_successor(m).map(|next| (m, next)))
            .collect()
    }

    fn valid_move_count(&self) -> usize {
        let mut pseudo = Vec::with_capacity(64);
        self.pseudo_moves(&mut pseudo);
        pseudo
            .into_iter()
            .filter(|&m| self.legal_successor(m).is_some())
            .count()
    }
}

impl fmt::Display for MailboxBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let ch = self.squares[Square::new(rank, file).idx()].map_or('.', piece_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "mailbox_tests.rs"]
mod mailbox_tests;
