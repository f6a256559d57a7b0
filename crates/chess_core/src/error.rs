//! Error type shared by the board, the evaluator and the move selectors.

use thiserror::Error;

use crate::types::Square;

/// Everything that can go wrong while choosing or applying a move.
///
/// `IllegalMove`, `MissingPiece`, `EmptyHistory` and `BoardRestore` are
/// contract violations: the caller misused the board or the rules engine
/// broke its promises. They are propagated, never retried.
/// `NoMoveAvailable` and `NoCandidates` are the legitimate "nothing to play"
/// outcomes the driver reports. `Io` covers a player that cannot read its
/// moves or write its prompt.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("illegal move {0}")]
    IllegalMove(String),

    #[error("expected a piece on square {square} while scoring a capture")]
    MissingPiece { square: Square },

    #[error("no move to undo")]
    EmptyHistory,

    #[error("board could not be restored after a scoped move: {0}")]
    BoardRestore(String),

    #[error("no move available: the position is already decided")]
    NoMoveAvailable,

    #[error("no candidate moves to sample from")]
    NoCandidates,

    #[error("invalid FEN '{0}'")]
    InvalidFen(String),

    #[error("cannot parse move '{0}'")]
    InvalidMove(String),

    #[error("move input failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
