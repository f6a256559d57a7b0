//! Console rendering of the board

use chess_core::{RulesEngine, ScoreBoard};

/// Unicode diagram with rank 8 at the top, white at the bottom.
pub fn render<R: RulesEngine>(position: &R) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            out.push(' ');
            out.push(position.piece_at(rank * 8 + file).map_or('·', |piece| piece.symbol()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

/// Running material totals, as printed after every move.
pub fn score_line<R: RulesEngine>(board: &ScoreBoard<R>) -> String {
    format!(
        "White: {}  Black: {}{}",
        board.white_score(),
        board.black_score(),
        if board.is_endgame() { "  (endgame)" } else { "" }
    )
}
