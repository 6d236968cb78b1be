//! Error taxonomy shared by every selector and the registry.

use thiserror::Error;

/// Invalid algorithm configuration, reported when an algorithm is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("need {expected} weights, got {actual}")]
    WrongWeightCount { expected: usize, actual: usize },

    #[error("breadth must be positive")]
    NonPositiveBreadth,

    #[error("invalid value for {field}: {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("configuration record has no AlgoName field")]
    MissingAlgoName,

    #[error("no algorithm registered under the name {0:?}")]
    UnknownAlgo(String),
}

/// Contract violations detected while choosing a move. None of these are
/// recoverable; the caller passed a board it should have screened first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("cannot find next move for a board in checkmate")]
    CheckMate,

    #[error("cannot find next move for a board in stalemate")]
    StaleMate,

    #[error("board is neither checkmate nor stalemate but reports no valid moves")]
    NoValidMoves,

    #[error("move input failed: {0}")]
    Input(String),
}

/// FEN import failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, got {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks in FEN board section, got {0}")]
    RankCount(usize),

    #[error("invalid piece character {0:?}")]
    BadPiece(char),

    #[error("rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: usize },

    #[error("invalid side to move {0:?}")]
    SideToMove(String),

    #[error("invalid castling character {0:?}")]
    Castling(char),

    #[error("invalid en-passant square {0:?}")]
    EnPassant(String),

    #[error("invalid move counter {0:?}")]
    Clock(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot parse {0:?} as a move in coordinate notation")]
pub struct ParseMoveError(pub String);
