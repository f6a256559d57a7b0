//! [`RulesEngine`] adapter over the `cozy-chess` move generator.
//!
//! `cozy_chess::Board` is a copy-make board without an undo stack, so the
//! adapter keeps a snapshot of the board before every pushed move and a
//! hash history for repetition detection. cozy-chess stops counting the
//! halfmove clock at 100, so the adapter keeps its own for the
//! seventy-five-move rule.

use cozy_chess::{
    Board, Color as CozyColor, File, Move, Piece as CozyPiece, Square as CozySquare,
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
};

use crate::error::{EngineError, Result};
use crate::rules::RulesEngine;
use crate::types::{Color, Piece, PieceKind, Square};

/// Fifty-move rule threshold in half-moves.
const FIFTY_MOVE_PLIES: u16 = 100;
/// Seventy-five-move rule threshold in half-moves.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

#[derive(Clone, Debug)]
pub struct CozyPosition {
    board: Board,
    /// Board before each pushed move, paired with the move itself.
    undo: Vec<(Board, Move)>,
    /// Hash of every position reached so far, current position last.
    hashes: Vec<u64>,
    /// Halfmove clock of every position reached so far, current last.
    clocks: Vec<u16>,
}

impl Default for CozyPosition {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl CozyPosition {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let board =
            Board::from_fen(fen, false).map_err(|_| EngineError::InvalidFen(fen.to_string()))?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        let hashes = vec![board.hash()];
        let clocks = vec![u16::from(board.halfmove_clock())];
        Self {
            board,
            undo: Vec::new(),
            hashes,
            clocks,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Formats a move in standard UCI notation (castling as `e1g1`, not as
    /// the king-takes-rook form cozy-chess uses internally).
    ///
    /// Castling is recognised from the pieces on the board, so `mv` must be
    /// formatted before it is pushed.
    pub fn uci(&self, mv: Move) -> String {
        if self.is_castle(mv) {
            let file = if mv.to.file() as u8 > mv.from.file() as u8 {
                File::G
            } else {
                File::C
            };
            let to = CozySquare::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        mv.to_string()
    }

    /// Parses a UCI move and matches it against the legal moves, so both
    /// `e1g1` and `e1h1` are accepted for castling.
    pub fn parse_uci(&self, text: &str) -> Result<Move> {
        let wanted = text.trim().to_ascii_lowercase();
        self.legal_moves()
            .into_iter()
            .find(|&mv| self.uci(mv) == wanted || mv.to_string() == wanted)
            .ok_or_else(|| EngineError::InvalidMove(text.to_string()))
    }

    /// Half-moves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u16 {
        self.clocks.last().copied().unwrap_or_default()
    }

    fn is_castle(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(CozyPiece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move())
    }

    fn has_legal_move(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// True if `color` cannot possibly deliver mate with its remaining material.
    fn has_insufficient_material(&self, color: Color) -> bool {
        let board = &self.board;
        let ours = board.colors(to_cozy_color(color));
        let theirs = board.colors(to_cozy_color(color.other()));
        let heavy = board.pieces(CozyPiece::Pawn)
            | board.pieces(CozyPiece::Rook)
            | board.pieces(CozyPiece::Queen);

        if !(ours & heavy).is_empty() {
            return false;
        }
        if !(ours & board.pieces(CozyPiece::Knight)).is_empty() {
            let their_minor_or_rook =
                theirs & !board.pieces(CozyPiece::King) & !board.pieces(CozyPiece::Queen);
            return ours.len() <= 2 && their_minor_or_rook.is_empty();
        }
        if !(ours & board.pieces(CozyPiece::Bishop)).is_empty() {
            let bishops = board.pieces(CozyPiece::Bishop);
            let mut shades = bishops.into_iter().map(|sq| square_shade(sq as Square));
            let same_shade = match shades.next() {
                Some(first) => shades.all(|shade| shade == first),
                None => true,
            };
            return same_shade
                && board.pieces(CozyPiece::Pawn).is_empty()
                && board.pieces(CozyPiece::Knight).is_empty();
        }
        true
    }
}

impl RulesEngine for CozyPosition {
    type Move = Move;

    fn side_to_move(&self) -> Color {
        from_cozy_color(self.board.side_to_move())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let sq = to_cozy_square(square);
        let color = self.board.color_on(sq)?;
        let kind = self.board.piece_on(sq)?;
        Some(Piece::new(from_cozy_color(color), from_cozy_piece(kind)))
    }

    fn is_attacked_by(&self, color: Color, square: Square) -> bool {
        let board = &self.board;
        let sq = to_cozy_square(square);
        let occupied = board.occupied();
        let diagonal = board.pieces(CozyPiece::Bishop) | board.pieces(CozyPiece::Queen);
        let orthogonal = board.pieces(CozyPiece::Rook) | board.pieces(CozyPiece::Queen);

        // A pawn of `color` attacks `sq` iff a pawn of the other color on `sq`
        // would attack the pawn's square.
        let attackers = (get_pawn_attacks(sq, to_cozy_color(color.other()))
            & board.pieces(CozyPiece::Pawn))
            | (get_knight_moves(sq) & board.pieces(CozyPiece::Knight))
            | (get_king_moves(sq) & board.pieces(CozyPiece::King))
            | (get_bishop_moves(sq, occupied) & diagonal)
            | (get_rook_moves(sq, occupied) & orthogonal);

        !(attackers & board.colors(to_cozy_color(color))).is_empty()
    }

    fn is_capture(&self, mv: Move) -> bool {
        let them = to_cozy_color(self.side_to_move().other());
        self.board.color_on(mv.to) == Some(them) || self.is_en_passant(mv)
    }

    fn is_en_passant(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(CozyPiece::Pawn)
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none()
    }

    fn from_square(&self, mv: Move) -> Square {
        mv.from as Square
    }

    fn to_square(&self, mv: Move) -> Square {
        mv.to as Square
    }

    fn promotion(&self, mv: Move) -> Option<PieceKind> {
        mv.promotion.map(from_cozy_piece)
    }

    fn move_text(&self, mv: Move) -> String {
        self.uci(mv)
    }

    fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv)
    }

    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
    }

    fn push(&mut self, mv: Move) -> Result<()> {
        if !self.board.is_legal(mv) {
            return Err(EngineError::IllegalMove(mv.to_string()));
        }
        let resets_clock =
            self.is_capture(mv) || self.board.piece_on(mv.from) == Some(CozyPiece::Pawn);
        let clock = if resets_clock {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };

        let before = self.board.clone();
        self.board.play_unchecked(mv);
        self.undo.push((before, mv));
        self.hashes.push(self.board.hash());
        self.clocks.push(clock);
        Ok(())
    }

    fn pop(&mut self) -> Option<Move> {
        let (board, mv) = self.undo.pop()?;
        self.board = board;
        self.hashes.pop();
        self.clocks.pop();
        Some(mv)
    }

    fn move_count(&self) -> usize {
        self.undo.len()
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    fn is_insufficient_material(&self) -> bool {
        Color::BOTH
            .iter()
            .all(|&color| self.has_insufficient_material(color))
    }

    fn is_repetition(&self, count: usize) -> bool {
        let current = self.board.hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= count
    }

    fn can_claim_draw(&self) -> bool {
        self.halfmove_clock() >= FIFTY_MOVE_PLIES || self.is_repetition(3)
    }

    fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES && !self.is_checkmate()
    }
}

// =============================================================================
// Conversions between cozy-chess types and the core types
// =============================================================================

fn to_cozy_square(square: Square) -> CozySquare {
    CozySquare::index(square as usize)
}

fn to_cozy_color(color: Color) -> CozyColor {
    match color {
        Color::White => CozyColor::White,
        Color::Black => CozyColor::Black,
    }
}

fn from_cozy_color(color: CozyColor) -> Color {
    match color {
        CozyColor::White => Color::White,
        CozyColor::Black => Color::Black,
    }
}

fn from_cozy_piece(piece: CozyPiece) -> PieceKind {
    match piece {
        CozyPiece::Pawn => PieceKind::Pawn,
        CozyPiece::Knight => PieceKind::Knight,
        CozyPiece::Bishop => PieceKind::Bishop,
        CozyPiece::Rook => PieceKind::Rook,
        CozyPiece::Queen => PieceKind::Queen,
        CozyPiece::King => PieceKind::King,
    }
}

/// 0 for dark squares (a1 is dark), 1 for light squares.
fn square_shade(square: Square) -> u8 {
    ((square / 8 + square % 8) % 2) as u8
}

#[cfg(test)]
#[path = "cozy_tests.rs"]
mod cozy_tests;
