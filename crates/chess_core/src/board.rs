//! Position wrapper that keeps running material totals in step with the
//! moves pushed onto it.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::eval;
use crate::rules::RulesEngine;
use crate::tables::{FULL_SET_MATERIAL, MAX_SCORE, piece_value};
use crate::types::{Color, Piece, PieceKind, Square};

/// Score-tracking board.
///
/// Each side starts with [`MAX_SCORE`] of material "remaining" and loses the
/// value of every piece captured from it, so at any point
/// `white_score == MAX_SCORE - captured white material` (and the same for
/// black). Scores are adjusted on [`push`](Self::push) and restored exactly
/// on [`pop`](Self::pop).
#[derive(Clone, Debug)]
pub struct ScoreBoard<R: RulesEngine> {
    position: R,
    white_score: i32,
    black_score: i32,
    endgame: bool,
}

/// Side that loses material and how much, for one capturing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capture {
    victim: Color,
    value: i32,
}

impl<R: RulesEngine> ScoreBoard<R> {
    pub fn new(position: R) -> Self {
        Self {
            position,
            white_score: MAX_SCORE,
            black_score: MAX_SCORE,
            endgame: false,
        }
    }

    /// Board for a game set up from an arbitrary position.
    ///
    /// Each side is charged for the material it lacks compared with a full
    /// set, as if those pieces had been captured earlier. The standard
    /// starting position scores exactly like [`new`](Self::new); extra
    /// promoted material is not credited.
    pub fn from_position(position: R) -> Self {
        let mut board = Self::new(position);
        for color in Color::BOTH {
            let missing = (FULL_SET_MATERIAL - board.material_on_board(color)).max(0);
            *board.score_mut(color) -= missing;
        }
        debug!(
            white_score = board.white_score,
            black_score = board.black_score,
            "scores seeded from the pieces on the board"
        );
        board
    }

    pub fn position(&self) -> &R {
        &self.position
    }

    pub fn into_inner(self) -> R {
        self.position
    }

    pub fn white_score(&self) -> i32 {
        self.white_score
    }

    pub fn black_score(&self) -> i32 {
        self.black_score
    }

    pub fn score_of(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_score,
            Color::Black => self.black_score,
        }
    }

    pub fn is_endgame(&self) -> bool {
        self.endgame
    }

    pub fn set_endgame(&mut self, endgame: bool) {
        self.endgame = endgame;
    }

    /// Recomputes the endgame flag from the pieces on the board.
    ///
    /// Called once per turn, never from inside a search.
    pub fn refresh_endgame(&mut self) -> bool {
        let endgame = eval::is_endgame(self);
        if endgame != self.endgame {
            debug!(endgame, "endgame phase changed");
        }
        self.endgame = endgame;
        endgame
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<R::Move> {
        self.position.legal_moves()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Applies a legal move, charging any captured material to its owner.
    pub fn push(&mut self, mv: R::Move) -> Result<()> {
        if !self.position.is_legal(mv) {
            return Err(EngineError::IllegalMove(mv.to_string()));
        }
        let capture = self.capture_of(mv)?;
        self.position.push(mv)?;
        if let Some(capture) = capture {
            *self.score_mut(capture.victim) -= capture.value;
        }
        Ok(())
    }

    /// Undoes the last move and gives back the material it captured.
    pub fn pop(&mut self) -> Result<R::Move> {
        let mv = self.position.pop().ok_or(EngineError::EmptyHistory)?;
        if let Some(capture) = self.capture_of(mv)? {
            *self.score_mut(capture.victim) += capture.value;
        }
        Ok(mv)
    }

    /// Pushes `mv` and returns a guard that pops it again when dropped.
    pub fn apply(&mut self, mv: R::Move) -> Result<MoveScope<'_, R>> {
        self.push(mv)?;
        Ok(MoveScope {
            board: self,
            armed: true,
        })
    }

    /// Reports whether `mv` delivers checkmate, leaving the board untouched.
    pub fn probe_checkmate(&mut self, mv: R::Move) -> Result<bool> {
        let scope = self.apply(mv)?;
        let mate = scope.position().is_checkmate();
        scope.undo()?;
        Ok(mate)
    }

    /// Classifies `mv` in the position *before* it is played.
    ///
    /// En passant charges the capturing pawn's value to the opponent: the
    /// victim is always a pawn, so that saves looking up the captured square.
    fn capture_of(&self, mv: R::Move) -> Result<Option<Capture>> {
        if !self.position.is_capture(mv) {
            return Ok(None);
        }
        let capture = if self.position.is_en_passant(mv) {
            let from = self.position.from_square(mv);
            let attacker = self.piece_on(from)?;
            Capture {
                victim: attacker.color.other(),
                value: piece_value(attacker.kind),
            }
        } else {
            let to = self.position.to_square(mv);
            let captured = self.piece_on(to)?;
            Capture {
                victim: captured.color,
                value: piece_value(captured.kind),
            }
        };
        Ok(Some(capture))
    }

    fn material_on_board(&self, color: Color) -> i32 {
        (0..64u8)
            .filter_map(|square| self.position.piece_at(square))
            .filter(|piece| piece.color == color && piece.kind != PieceKind::King)
            .map(|piece| piece_value(piece.kind))
            .sum()
    }

    fn piece_on(&self, square: Square) -> Result<Piece> {
        self.position
            .piece_at(square)
            .ok_or(EngineError::MissingPiece { square })
    }

    fn score_mut(&mut self, color: Color) -> &mut i32 {
        match color {
            Color::White => &mut self.white_score,
            Color::Black => &mut self.black_score,
        }
    }
}

/// A move applied to a [`ScoreBoard`] for the lifetime of the guard.
///
/// [`undo`](Self::undo) pops the move and reports failures. If the guard is
/// dropped instead (early return, `?`, unwinding) the move is popped there;
/// a board that cannot be restored at that point is corrupt, so the drop
/// panics rather than leave stale state for sibling branches.
pub struct MoveScope<'a, R: RulesEngine> {
    board: &'a mut ScoreBoard<R>,
    armed: bool,
}

impl<R: RulesEngine> MoveScope<'_, R> {
    pub fn undo(mut self) -> Result<R::Move> {
        self.armed = false;
        self.board
            .pop()
            .map_err(|err| EngineError::BoardRestore(err.to_string()))
    }
}

impl<R: RulesEngine> Deref for MoveScope<'_, R> {
    type Target = ScoreBoard<R>;

    fn deref(&self) -> &ScoreBoard<R> {
        self.board
    }
}

impl<R: RulesEngine> DerefMut for MoveScope<'_, R> {
    fn deref_mut(&mut self) -> &mut ScoreBoard<R> {
        self.board
    }
}

impl<R: RulesEngine> Drop for MoveScope<'_, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = self.board.pop() {
            if !std::thread::panicking() {
                panic!("scoped move could not be undone: {err}");
            }
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
