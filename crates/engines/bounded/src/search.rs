//! Budgeted minimax over a deduplicated state arena.
//!
//! The root's successors are registered at depth 0. Registered states are then
//! expanded in registration order, which is breadth first, until either the ply
//! limit or the state budget stops growth. Scores are backed up in reverse
//! registration order so every child is final before its parent reads it.

use chess_core::{
    Board, Color, ConfigError, Move, MoveSelector, PieceType, Score, SearchError, Square,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DumboConfig;
use crate::state::{StateArena, StateKey, StateNode};

/// `true` when the first score is strictly better than the second for a color.
pub type Comparator = fn(Score, Score) -> bool;

pub fn comparator_for_color(color: Color) -> Comparator {
    match color {
        Color::White => higher,
        Color::Black => lower,
    }
}

fn higher(a: Score, b: Score) -> bool {
    a > b
}

fn lower(a: Score, b: Score) -> bool {
    a < b
}

/// Result of one search, with the effort it took.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub mv: Move,
    pub score: Score,
    pub states_registered: usize,
    pub states_expanded: usize,
    /// Greatest depth of any registered state, 0 being the root's successors.
    pub deepest: usize,
}

enum RootEntry {
    State(usize),
    Unregistered(Score),
}

#[derive(Debug, Clone)]
pub struct AlgoDumbo {
    max_depth: usize,
    max_num_states: usize,
    max_score: Score,
    weights: [Score; 7],
    valid_move_score: Score,
}

impl AlgoDumbo {
    pub const NAME: &'static str = "AlgoDumbo";

    pub fn from_config(config: &DumboConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut weights = [0.0; 7];
        weights[PieceType::Pawn.idx()] = config.pawn_score;
        weights[PieceType::EnPassantCapturablePawn.idx()] = config.pawn_score;
        weights[PieceType::Rook.idx()] = config.rook_score;
        weights[PieceType::Knight.idx()] = config.knight_score;
        weights[PieceType::Bishop.idx()] = config.bishop_score;
        weights[PieceType::Queen.idx()] = config.queen_score;
        Ok(Self {
            max_depth: config.max_depth as usize,
            max_num_states: config.max_num_states as usize,
            max_score: config.max_score,
            weights,
            valid_move_score: config.valid_move_score,
        })
    }

    pub fn create_from_config<B: Board + 'static>(
        value: &Value,
    ) -> Result<Box<dyn MoveSelector<B>>, ConfigError> {
        let config = DumboConfig::from_value(value)?;
        Ok(Box::new(Self::from_config(&config)?))
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_num_states(&self) -> usize {
        self.max_num_states
    }

    /// Material plus mobility, White-positive, clamped to `max_score`.
    fn static_score<B: Board>(&self, board: &B, legal_replies: usize) -> Score {
        let to_move = board.who_plays_next();
        if legal_replies == 0 {
            return if board.is_checkmate() {
                -(to_move.sign() as f64) * self.max_score
            } else {
                0.0
            };
        }
        let material: Score = Square::all()
            .filter_map(|sq| board.piece(sq))
            .map(|pc| pc.color.sign() as f64 * self.weights[pc.piece_type.idx()])
            .sum();
        let mobility = to_move.sign() as f64 * self.valid_move_score * legal_replies as f64;
        (material + mobility).clamp(-self.max_score, self.max_score)
    }

    /// Leaves are scored on registration and keep no board. A state that may
    /// still be expanded keeps its board and is scored when its replies are
    /// generated, so every state's moves are generated once.
    fn state_node<B: Board>(&self, board: B, depth: usize) -> StateNode<B> {
        let to_move = board.who_plays_next();
        if depth + 1 < self.max_depth {
            return StateNode {
                board: Some(board),
                depth,
                to_move,
                static_score: 0.0,
                legal_replies: None,
                children: Vec::new(),
            };
        }
        let replies = board.valid_move_count();
        StateNode {
            static_score: self.static_score(&board, replies),
            board: None,
            depth,
            to_move,
            legal_replies: Some(replies),
            children: Vec::new(),
        }
    }

    /// Scores the states growth stopped short of.
    fn score_pending<B: Board>(&self, arena: &mut StateArena<B>) {
        for idx in 0..arena.len() {
            let node = arena.node_mut(idx);
            if let Some(board) = node.board.take() {
                let replies = board.valid_move_count();
                node.static_score = self.static_score(&board, replies);
                node.legal_replies = Some(replies);
            }
        }
    }

    pub fn search<B: Board>(&self, board: &B) -> Result<SearchOutcome, SearchError> {
        if board.is_checkmate() {
            return Err(SearchError::CheckMate);
        }
        if board.is_stalemate() {
            return Err(SearchError::StaleMate);
        }
        let root_moves = board.valid_moves();
        if root_moves.is_empty() {
            return Err(SearchError::NoValidMoves);
        }

        let mut arena = StateArena::new(self.max_num_states);
        let mut roots = Vec::with_capacity(root_moves.len());
        for (mv, next) in root_moves {
            let key = StateKey::of(&next);
            let entry = if let Some(idx) = arena.lookup(&key) {
                RootEntry::State(idx)
            } else if arena.has_room_for(1) {
                RootEntry::State(arena.insert(key, self.state_node(next, 0)))
            } else {
                let replies = next.valid_move_count();
                RootEntry::Unregistered(self.static_score(&next, replies))
            };
            roots.push((mv, entry));
        }

        let expanded = self.expand(&mut arena);
        self.score_pending(&mut arena);
        let effective = Self::back_up(&arena);

        let mover = board.who_plays_next();
        let better = comparator_for_color(mover);
        let mut best: Option<(Move, Score)> = None;
        for (mv, entry) in &roots {
            let score = match entry {
                RootEntry::State(idx) => effective[*idx],
                RootEntry::Unregistered(s) => *s,
            };
            trace!(%mv, score, "root candidate");
            match best {
                Some((_, s)) if !better(score, s) => {}
                _ => best = Some((*mv, score)),
            }
        }
        let (mv, score) = best.ok_or(SearchError::NoValidMoves)?;

        let outcome = SearchOutcome {
            mv,
            score,
            states_registered: arena.len(),
            states_expanded: expanded,
            deepest: arena.nodes().iter().map(|n| n.depth).max().unwrap_or(0),
        };
        debug!(
            %mv,
            score,
            states = outcome.states_registered,
            expanded,
            deepest = outcome.deepest,
            mover = mover.name(),
            "bounded search choice"
        );
        Ok(outcome)
    }

    /// Grows the arena breadth first. A state is expanded only when its
    /// children stay within the ply limit and all of its replies fit the
    /// remaining budget; the first state that does not fit ends all growth.
    fn expand<B: Board>(&self, arena: &mut StateArena<B>) -> usize {
        let mut expanded = 0;
        let mut cursor = 0;
        while cursor < arena.len() {
            let idx = cursor;
            cursor += 1;
            let depth = arena.node(idx).depth;
            let Some(board) = arena.node_mut(idx).board.take() else {
                continue;
            };
            let replies = board.valid_moves();
            let node = arena.node_mut(idx);
            node.static_score = self.static_score(&board, replies.len());
            node.legal_replies = Some(replies.len());
            if replies.is_empty() {
                continue;
            }
            if !arena.has_room_for(replies.len()) {
                debug!(states = arena.len(), depth, "state budget reached");
                break;
            }
            let mut children = Vec::with_capacity(replies.len());
            for next in replies.into_values() {
                let key = StateKey::of(&next);
                let child = match arena.lookup(&key) {
                    Some(existing) => existing,
                    None => arena.insert(key, self.state_node(next, depth + 1)),
                };
                children.push(child);
            }
            arena.node_mut(idx).children = children;
            expanded += 1;
        }
        expanded
    }

    /// Minimax backup. Only children one ply deeper carry a backed-up score;
    /// transpositions to shallower or equal depth count with their static
    /// score, which keeps repetitions from forming cycles.
    fn back_up<B: Board>(arena: &StateArena<B>) -> Vec<Score> {
        let nodes = arena.nodes();
        let mut effective: Vec<Score> = nodes.iter().map(|n| n.static_score).collect();
        for idx in (0..nodes.len()).rev() {
            let node = &nodes[idx];
            if node.children.is_empty() {
                continue;
            }
            let better = comparator_for_color(node.to_move);
            let mut best: Option<Score> = None;
            for &child in &node.children {
                let score = if nodes[child].depth == node.depth + 1 {
                    effective[child]
                } else {
                    nodes[child].static_score
                };
                match best {
                    Some(b) if !better(score, b) => {}
                    _ => best = Some(score),
                }
            }
            if let Some(b) = best {
                effective[idx] = b;
            }
        }
        effective
    }
}

impl<B: Board> MoveSelector<B> for AlgoDumbo {
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError> {
        self.search(board).map(|o| o.mv)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
