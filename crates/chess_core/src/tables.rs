//! Piece values and piece-square tables.
//!
//! The tables are written the way a board is drawn, rank 8 on top and
//! a-file on the left. They are re-oriented at compile time into the two
//! lookup orientations the evaluator uses, both indexed `[row][column]`
//! with `row = square / 8` and `column = square % 8`:
//! - white-relative: row 0 is rank 1,
//! - mirrored for black: rank and file both flipped.

use crate::types::{Color, PieceKind, Square, file_of, rank_of};

pub type Table = [[i32; 8]; 8];

/// Starting material "remaining" for each side.
pub const MAX_SCORE: i32 = 23_000;

/// Material value of a piece kind, used to score captures.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Bishop => 330,
        PieceKind::King => 20_000,
        PieceKind::Knight => 320,
        PieceKind::Pawn => 100,
        PieceKind::Queen => 900,
        PieceKind::Rook => 500,
    }
}

/// Material of one side's full set of pieces, king excluded.
pub const FULL_SET_MATERIAL: i32 = 8 * piece_value(PieceKind::Pawn)
    + 2 * piece_value(PieceKind::Knight)
    + 2 * piece_value(PieceKind::Bishop)
    + 2 * piece_value(PieceKind::Rook)
    + piece_value(PieceKind::Queen);

#[rustfmt::skip]
const PAWN: Table = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
const KING_ENDGAME: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Flips the rank order: the drawn layout becomes white-relative.
const fn white_relative(drawn: &Table) -> Table {
    let mut out = [[0; 8]; 8];
    let mut row = 0;
    while row < 8 {
        out[row] = drawn[7 - row];
        row += 1;
    }
    out
}

/// Rank-and-file mirror of a white-relative table.
const fn mirrored(table: &Table) -> Table {
    let mut out = [[0; 8]; 8];
    let mut row = 0;
    while row < 8 {
        let mut col = 0;
        while col < 8 {
            out[row][col] = table[7 - row][7 - col];
            col += 1;
        }
        row += 1;
    }
    out
}

/// White-relative tables indexed by `PieceKind::idx()`.
pub const WHITE_TABLES: [Table; 6] = [
    white_relative(&PAWN),
    white_relative(&KNIGHT),
    white_relative(&BISHOP),
    white_relative(&ROOK),
    white_relative(&QUEEN),
    white_relative(&KING),
];

/// Mirrored tables for black, indexed by `PieceKind::idx()`.
pub const BLACK_TABLES: [Table; 6] = [
    mirrored(&WHITE_TABLES[0]),
    mirrored(&WHITE_TABLES[1]),
    mirrored(&WHITE_TABLES[2]),
    mirrored(&WHITE_TABLES[3]),
    mirrored(&WHITE_TABLES[4]),
    mirrored(&WHITE_TABLES[5]),
];

pub const WHITE_KING_ENDGAME: Table = white_relative(&KING_ENDGAME);
pub const BLACK_KING_ENDGAME: Table = mirrored(&WHITE_KING_ENDGAME);

/// Table to consult for a piece of `color`, honouring the endgame king override.
pub fn table_for(kind: PieceKind, color: Color, endgame: bool) -> &'static Table {
    match (color, endgame && kind == PieceKind::King) {
        (Color::White, true) => &WHITE_KING_ENDGAME,
        (Color::Black, true) => &BLACK_KING_ENDGAME,
        (Color::White, false) => &WHITE_TABLES[kind.idx()],
        (Color::Black, false) => &BLACK_TABLES[kind.idx()],
    }
}

/// Raw, unsigned positional bonus for `kind` of `color` standing on `square`.
pub fn lookup(kind: PieceKind, color: Color, square: Square, endgame: bool) -> i32 {
    table_for(kind, color, endgame)[rank_of(square)][file_of(square)]
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
