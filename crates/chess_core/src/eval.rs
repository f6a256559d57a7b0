//! Static evaluation of a [`ScoreBoard`] from one color's point of view.
//!
//! The score is the sum of three independent terms:
//! - material: running material balance kept by the board,
//! - placement: piece-square table bonuses,
//! - control: a flat bonus per occupied square for each side attacking it.
//!
//! Every term is antisymmetric, so
//! `evaluate(board, White) == -evaluate(board, Black)` holds exactly.

use crate::board::ScoreBoard;
use crate::error::{EngineError, Result};
use crate::rules::RulesEngine;
use crate::tables::{self, piece_value};
use crate::types::{Color, Piece, PieceKind, Square};

/// Bonus for each occupied square a side attacks.
pub const CONTROL_BONUS: i32 = 30;

/// Maximum number of non-pawn, non-king pieces for the endgame phase.
pub const ENDGAME_PIECE_LIMIT: usize = 4;

/// Score bound no evaluation can reach; doubles as the search window.
pub const INFINITY_SCORE: i32 = i32::MAX / 2;

/// Evaluates the position for `color`. Positive means `color` is better.
pub fn evaluate<R: RulesEngine>(board: &ScoreBoard<R>, color: Color) -> i32 {
    material_term(board, color) + placement_term(board, color) + control_term(board, color)
}

/// `white_score - black_score`, negated for black.
pub fn material_term<R: RulesEngine>(board: &ScoreBoard<R>, color: Color) -> i32 {
    let balance = board.white_score() - board.black_score();
    match color {
        Color::White => balance,
        Color::Black => -balance,
    }
}

/// Piece-square bonuses: own pieces count for `color`, enemy pieces against.
pub fn placement_term<R: RulesEngine>(board: &ScoreBoard<R>, color: Color) -> i32 {
    let endgame = board.is_endgame();
    occupied(board)
        .map(|(square, piece)| {
            let value = piece_square_value(piece, square, endgame);
            if piece.color == color { value } else { -value }
        })
        .sum()
}

/// Square control over occupied squares.
///
/// Attacks by each side are checked independently; a square attacked by
/// both nets to zero.
pub fn control_term<R: RulesEngine>(board: &ScoreBoard<R>, color: Color) -> i32 {
    let position = board.position();
    occupied(board)
        .map(|(square, _)| {
            let mut value = 0;
            if position.is_attacked_by(color, square) {
                value += CONTROL_BONUS;
            }
            if position.is_attacked_by(color.other(), square) {
                value -= CONTROL_BONUS;
            }
            value
        })
        .sum()
}

/// Unsigned table value for `piece` on `square`.
#[inline]
pub fn piece_square_value(piece: Piece, square: Square, endgame: bool) -> i32 {
    tables::lookup(piece.kind, piece.color, square, endgame)
}

/// True when at most [`ENDGAME_PIECE_LIMIT`] pieces other than pawns and
/// kings remain on the board.
pub fn is_endgame<R: RulesEngine>(board: &ScoreBoard<R>) -> bool {
    let officers = occupied(board)
        .filter(|(_, piece)| !matches!(piece.kind, PieceKind::Pawn | PieceKind::King))
        .count();
    officers <= ENDGAME_PIECE_LIMIT
}

// =============================================================================
// Move ordering
// =============================================================================

/// Heuristic value of playing `mv`, for `color`.
///
/// Promotions are worth [`INFINITY_SCORE`]. Other moves get the placement
/// gain of the moving piece plus the capture balance (victim minus attacker,
/// a flat pawn for en passant). The result is negated when the side to move
/// is not `color`. Only used when the search is configured to order moves.
///
/// Fails with [`EngineError::MissingPiece`] if the moving piece or the
/// captured piece is not where the rules engine says it is.
pub fn move_value<R: RulesEngine>(board: &ScoreBoard<R>, mv: R::Move, color: Color) -> Result<i32> {
    let position = board.position();
    let our_turn = position.side_to_move() == color;

    if position.promotion(mv).is_some() {
        return Ok(if our_turn { INFINITY_SCORE } else { -INFINITY_SCORE });
    }

    let from = position.from_square(mv);
    let to = position.to_square(mv);
    let piece = piece_on(position, from)?;

    let endgame = board.is_endgame();
    let signed = |value: i32| if piece.color == color { value } else { -value };
    let position_change = signed(piece_square_value(piece, to, endgame))
        - signed(piece_square_value(piece, from, endgame));

    let capture_value = if !position.is_capture(mv) {
        0
    } else if position.is_en_passant(mv) {
        piece_value(PieceKind::Pawn)
    } else {
        piece_value(piece_on(position, to)?.kind) - piece_value(piece.kind)
    };

    let value = capture_value + position_change;
    Ok(if our_turn { value } else { -value })
}

fn piece_on<R: RulesEngine>(position: &R, square: Square) -> Result<Piece> {
    position
        .piece_at(square)
        .ok_or(EngineError::MissingPiece { square })
}

fn occupied<R: RulesEngine>(board: &ScoreBoard<R>) -> impl Iterator<Item = (Square, Piece)> + '_ {
    let position = board.position();
    (0..64u8).filter_map(move |square| position.piece_at(square).map(|piece| (square, piece)))
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
