//! The rules-engine contract consumed by every move selector.
//!
//! A board is an immutable snapshot: playing a move never mutates the receiver,
//! it produces a new board. Selectors only read pieces and ask for successors.

use std::collections::BTreeMap;

use crate::types::{Color, Move, Piece, Square};

/// Legal moves of a position, keyed and iterated in `Move` order.
pub type MoveMap<B> = BTreeMap<Move, B>;

pub trait Board: Clone {
    fn who_plays_next(&self) -> Color;

    fn piece(&self, square: Square) -> Option<Piece>;

    /// Castling rights towards the player's own left (White: queen side, Black: king side).
    fn can_castle_left(&self, color: Color) -> bool;

    /// Castling rights towards the player's own right (White: king side, Black: queen side).
    fn can_castle_right(&self, color: Color) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    /// Plays `mv`, returning `None` if it is not legal here.
    fn update_board(&self, mv: Move) -> Option<Self>;

    /// Every legal move with its resulting board. Empty when the side to move is stuck.
    fn valid_moves(&self) -> MoveMap<Self>;

    fn valid_move_count(&self) -> usize {
        self.valid_moves().len()
    }
}
