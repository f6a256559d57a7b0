//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning, scored by the heuristic
//! evaluator in `chess_core`. No transposition table, no iterative
//! deepening and no time management: every call searches exactly `depth`
//! plies.

pub mod search;

use chess_core::{Engine, EngineError, Result, RulesEngine, ScoreBoard};

pub use search::{search_best_move, MoveOrdering, SearchOutcome, Searcher};

/// Best-move strategy: plays the move the search rates highest for the side
/// to move.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u32,
    ordering: MoveOrdering,
    /// Node counter for the last search
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            ordering: MoveOrdering::default(),
            nodes: 0,
        }
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<R: RulesEngine> Engine<R> for MinimaxEngine {
    fn choose_move(&mut self, board: &mut ScoreBoard<R>) -> Result<R::Move> {
        let color = board.side_to_move();
        let outcome = search_best_move(board, self.depth, color, self.ordering)?;
        self.nodes = outcome.nodes;
        outcome.best_move.ok_or(EngineError::NoMoveAvailable)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
