//! The contract the search core needs from a chess rules implementation.
//!
//! Board representation, move generation and draw detection all live behind
//! this trait. The core never inspects a move or a position except through
//! it, so any conforming engine (the bundled [`CozyPosition`] adapter, or a
//! hand-built mock in tests) can be substituted.
//!
//! [`CozyPosition`]: crate::cozy::CozyPosition

use std::fmt;

use crate::error::Result;
use crate::types::{Color, Piece, PieceKind, Square};

/// Repetition count at which a game ends without a claim.
pub const FIVEFOLD: usize = 5;

pub trait RulesEngine {
    /// Opaque move value produced and interpreted only by the engine.
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// True if any piece of `color` attacks `square`, regardless of pins.
    fn is_attacked_by(&self, color: Color, square: Square) -> bool;

    fn is_capture(&self, mv: Self::Move) -> bool;

    fn is_en_passant(&self, mv: Self::Move) -> bool;

    fn from_square(&self, mv: Self::Move) -> Square;

    fn to_square(&self, mv: Self::Move) -> Square;

    fn promotion(&self, mv: Self::Move) -> Option<PieceKind>;

    /// Notation for `mv` in the current position, which must be the one
    /// `mv` is played from.
    fn move_text(&self, mv: Self::Move) -> String {
        mv.to_string()
    }

    fn is_legal(&self, mv: Self::Move) -> bool;

    /// Appends the legal moves of the current position to `moves`.
    ///
    /// The order is up to the engine but must be identical for identical
    /// positions within one process, searches rely on it for determinism.
    fn legal_moves_into(&self, moves: &mut Vec<Self::Move>);

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Applies a legal move. Engines reject illegal moves with
    /// [`EngineError::IllegalMove`](crate::EngineError::IllegalMove).
    fn push(&mut self, mv: Self::Move) -> Result<()>;

    /// Undoes the last pushed move and returns it.
    fn pop(&mut self) -> Option<Self::Move>;

    /// Number of moves currently on the undo stack.
    fn move_count(&self) -> usize;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    /// True if the current position occurred at least `count` times.
    fn is_repetition(&self, count: usize) -> bool;

    /// Threefold repetition or fifty-move rule.
    fn can_claim_draw(&self) -> bool;

    fn is_seventyfive_moves(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_repetition(FIVEFOLD)
            || self.can_claim_draw()
    }
}
