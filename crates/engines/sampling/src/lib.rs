//! Sampling Chess Engine
//!
//! Draws a handful of legal moves at random (with replacement), scores each
//! one ply deep with the heuristic evaluator and plays the best of them.
//! Much weaker than the minimax engine, which makes it a useful sparring
//! partner for it.

use std::collections::BTreeMap;

use chess_core::{evaluate, Engine, EngineError, Result, RulesEngine, ScoreBoard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::trace;


/// How sampled moves compete for selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKeying {
    /// Results are keyed by score: a later draw with an equal score replaces
    /// the earlier one.
    #[default]
    ScoreKeyed,
    /// Every draw is kept; the earliest draw wins a tie.
    AllSamples,
}

/// Randomized-sampling strategy.
#[derive(Debug, Clone)]
pub struct SamplingEngine {
    samples: usize,
    keying: SampleKeying,
    rng: StdRng,
}

impl SamplingEngine {
    /// Creates an engine seeded from the operating system.
    pub fn new(samples: usize) -> Self {
        Self::from_rng(samples, StdRng::from_entropy())
    }

    /// Creates an engine whose draws are reproducible.
    pub fn with_seed(samples: usize, seed: u64) -> Self {
        Self::from_rng(samples, StdRng::seed_from_u64(seed))
    }

    fn from_rng(samples: usize, rng: StdRng) -> Self {
        Self {
            samples,
            keying: SampleKeying::default(),
            rng,
        }
    }

    pub fn with_keying(mut self, keying: SampleKeying) -> Self {
        self.keying = keying;
        self
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn keying(&self) -> SampleKeying {
        self.keying
    }
}

impl<R: RulesEngine> Engine<R> for SamplingEngine {
    fn choose_move(&mut self, board: &mut ScoreBoard<R>) -> Result<R::Move> {
        let moves = board.legal_moves();
        if moves.is_empty() || self.samples == 0 {
            return Err(EngineError::NoCandidates);
        }

        let mover = board.side_to_move();
        let mut draws = Vec::with_capacity(self.samples);
        for draw in 0..self.samples {
            let mv = moves[self.rng.gen_range(0..moves.len())];
            let scope = board.apply(mv)?;
            let score = evaluate(&*scope, mover);
            scope.undo()?;

            trace!(draw, %mv, score, "sampled move");
            draws.push((mv, score));
        }

        select_best(&draws, self.keying)
            .map(|(mv, _)| mv)
            .ok_or(EngineError::NoCandidates)
    }

    fn name(&self) -> &str {
        "Sampling"
    }
}

/// Picks the highest-scoring draw under the given keying.
pub fn select_best<M: Copy>(draws: &[(M, i32)], keying: SampleKeying) -> Option<(M, i32)> {
    match keying {
        SampleKeying::ScoreKeyed => {
            let mut by_score = BTreeMap::new();
            for &(mv, score) in draws {
                by_score.insert(score, mv);
            }
            by_score.pop_last().map(|(score, mv)| (mv, score))
        }
        SampleKeying::AllSamples => draws.iter().fold(None, |best, &(mv, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((mv, score)),
        }),
    }
}
