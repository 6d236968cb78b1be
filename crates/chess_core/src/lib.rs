pub mod board;
pub mod error;
pub mod fen;
pub mod mailbox;
pub mod types;

pub use board::*;
pub use error::*;
pub use mailbox::MailboxBoard;
pub use types::*;

// =============================================================================
// Selector trait — implemented by every move-selection algorithm
// =============================================================================

/// A pluggable move-selection algorithm.
///
/// Implementations are generic over the rules engine so they can run on any
/// [`Board`]. A selector that finds no legal move reports [`Move::NONE`] or a
/// [`SearchError`], depending on its contract; callers screen checkmate and
/// stalemate before asking and validate the move they get back.
pub trait MoveSelector<B: Board>: Send {
    /// Returns the move this algorithm judges best for the side to move.
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError>;

    /// Stable registry name of the algorithm.
    fn name(&self) -> &str;
}

impl<B: Board, S: MoveSelector<B> + ?Sized> MoveSelector<B> for Box<S> {
    fn next_move(&mut self, board: &B) -> Result<Move, SearchError> {
        (**self).next_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
