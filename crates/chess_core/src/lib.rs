pub mod board;
pub mod cozy;
pub mod error;
pub mod eval;
pub mod rules;
pub mod tables;
pub mod types;

pub use board::*;
pub use cozy::CozyPosition;
pub use error::*;
pub use eval::{INFINITY_SCORE, evaluate, is_endgame};
pub use rules::*;
pub use tables::{MAX_SCORE, piece_value};
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move selector
// =============================================================================

/// Trait that all move selectors implement.
///
/// This allows the driver to pit the deterministic search against the
/// randomized sampler, or either against a human, without knowing which is
/// which.
pub trait Engine<R: RulesEngine>: Send {
    /// Picks a move for the side to move.
    ///
    /// The board may be mutated during the call but must be back in its
    /// original state (position and scores) when it returns.
    fn choose_move(&mut self, board: &mut ScoreBoard<R>) -> Result<R::Move>;

    /// Picks a move and plays it on `board`.
    fn play_move(&mut self, board: &mut ScoreBoard<R>) -> Result<R::Move> {
        let mv = self.choose_move(board)?;
        board.push(mv)?;
        Ok(mv)
    }

    /// Returns the engine's name for logs and the console.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
