use std::cmp::Reverse;
use std::time::Instant;

use chess_core::eval::move_value;
use chess_core::{evaluate, Color, Result, RulesEngine, ScoreBoard, INFINITY_SCORE};
use serde::Deserialize;
use tracing::debug;

/// Order in which a node visits its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrdering {
    /// The rules engine's enumeration order.
    #[default]
    EnumerationOrder,
    /// Highest [`move_value`] first; ties keep enumeration order.
    ByMoveValue,
}

/// Result of a search: the chosen move (if any), its backed-up score and the
/// number of moves pushed to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: Option<M>,
    pub score: i32,
    pub nodes: u64,
}

/// Searches `depth` plies for the move that is best for `color`.
///
/// Returns `best_move: None` when `depth` is zero or the root is already
/// game over; the score is then the static evaluation of the root.
pub fn search_best_move<R: RulesEngine>(
    board: &mut ScoreBoard<R>,
    depth: u32,
    color: Color,
    ordering: MoveOrdering,
) -> Result<SearchOutcome<R::Move>> {
    let start = Instant::now();
    let mut searcher = Searcher::new(color, ordering);
    let (best_move, score) =
        searcher.minimax(board, depth, -INFINITY_SCORE, INFINITY_SCORE, true)?;

    debug!(
        depth,
        score,
        nodes = searcher.nodes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        found = best_move.is_some(),
        "search finished"
    );

    Ok(SearchOutcome {
        best_move,
        score,
        nodes: searcher.nodes,
    })
}

/// Alpha-beta minimax scored from one fixed color's point of view.
pub struct Searcher {
    maximizing_color: Color,
    ordering: MoveOrdering,
    nodes: u64,
}

impl Searcher {
    pub fn new(maximizing_color: Color, ordering: MoveOrdering) -> Self {
        Self {
            maximizing_color,
            ordering,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the best move at this node and its score.
    ///
    /// Only a strictly better score replaces the current best move, so the
    /// earliest of several equally good moves wins.
    pub fn minimax<R: RulesEngine>(
        &mut self,
        board: &mut ScoreBoard<R>,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing_player: bool,
    ) -> Result<(Option<R::Move>, i32)> {
        if depth == 0 || board.is_game_over() {
            return Ok((None, evaluate(board, self.maximizing_color)));
        }

        let moves = self.ordered_moves(board)?;
        if moves.is_empty() {
            return Ok((None, evaluate(board, self.maximizing_color)));
        }

        let mut best_move = None;
        if maximizing_player {
            let mut max_eval = -INFINITY_SCORE;
            for mv in moves {
                let mut child = board.apply(mv)?;
                self.nodes += 1;
                let (_, score) = self.minimax(&mut *child, depth - 1, alpha, beta, false)?;
                child.undo()?;

                if score > max_eval {
                    max_eval = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best_move, max_eval))
        } else {
            let mut min_eval = INFINITY_SCORE;
            for mv in moves {
                let mut child = board.apply(mv)?;
                self.nodes += 1;
                let (_, score) = self.minimax(&mut *child, depth - 1, alpha, beta, true)?;
                child.undo()?;

                if score < min_eval {
                    min_eval = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best_move, min_eval))
        }
    }

    fn ordered_moves<R: RulesEngine>(&self, board: &ScoreBoard<R>) -> Result<Vec<R::Move>> {
        let moves = board.legal_moves();
        if self.ordering == MoveOrdering::EnumerationOrder {
            return Ok(moves);
        }

        let mover = board.side_to_move();
        let mut keyed = moves
            .into_iter()
            .map(|mv| Ok((move_value(board, mv, mover)?, mv)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by_key(|&(value, _)| Reverse(value));
        Ok(keyed.into_iter().map(|(_, mv)| mv).collect())
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
