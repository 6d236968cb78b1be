//! State canonicalization and the per-search state arena.
//!
//! States live in a flat `Vec` indexed by registration order, with a key map
//! for transposition lookup. Registration order is breadth first, so every
//! state appears after all states of smaller depth.

use std::collections::HashMap;

use chess_core::{Board, Color, Piece, Score, Square};

/// Placement, side to move and castling rights of a position.
///
/// The en-passant marker is part of the piece code, so a position right after
/// a double pawn step never merges with the same placement reached otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    placement: [u8; 64],
    side_to_move: Color,
    castling: [bool; 4],
}

impl StateKey {
    pub fn of<B: Board>(board: &B) -> Self {
        let mut placement = [0u8; 64];
        for sq in Square::all() {
            placement[sq.idx()] = board.piece(sq).map_or(0, piece_code);
        }
        Self {
            placement,
            side_to_move: board.who_plays_next(),
            castling: [
                board.can_castle_left(Color::White),
                board.can_castle_right(Color::White),
                board.can_castle_left(Color::Black),
                board.can_castle_right(Color::Black),
            ],
        }
    }
}

fn piece_code(p: Piece) -> u8 {
    1 + (p.color.idx() * 7 + p.piece_type.idx()) as u8
}

pub(crate) struct StateNode<B> {
    /// Held only until the state's replies have been generated.
    pub board: Option<B>,
    pub depth: usize,
    pub to_move: Color,
    /// Valid once `legal_replies` is known.
    pub static_score: Score,
    pub legal_replies: Option<usize>,
    pub children: Vec<usize>,
}

pub(crate) struct StateArena<B> {
    nodes: Vec<StateNode<B>>,
    index: HashMap<StateKey, usize>,
    capacity: usize,
}

impl<B: Board> StateArena<B> {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_room_for(&self, extra: usize) -> bool {
        self.nodes.len() + extra <= self.capacity
    }

    pub fn lookup(&self, key: &StateKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Registers a new state. The caller must have checked `has_room_for`
    /// and that `key` is absent.
    pub fn insert(&mut self, key: StateKey, node: StateNode<B>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(key, idx);
        idx
    }

    pub fn node(&self, idx: usize) -> &StateNode<B> {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut StateNode<B> {
        &mut self.nodes[idx]
    }

    pub fn nodes(&self) -> &[StateNode<B>] {
        &self.nodes
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
