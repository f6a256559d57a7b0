//! Game loop for playing one game between two players

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chess_core::{Color, CozyPosition, Engine, RulesEngine, ScoreBoard, FIVEFOLD};
use minimax_engine::MinimaxEngine;
use sampling_engine::SamplingEngine;
use tracing::info;

use crate::config::{PlayConfig, PlayerKind};
use crate::display;
use crate::human::HumanPlayer;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
    /// Threefold repetition or the fifty-move rule
    ClaimableDraw,
    /// The configured ply limit was hit with the game still running
    MoveLimit,
}

impl Outcome {
    /// Reads the outcome off a finished position, `None` while play goes on.
    ///
    /// A position that is both stalemate and short of mating material is
    /// reported as stalemate.
    pub fn of<R: RulesEngine>(position: &R) -> Option<Self> {
        if position.is_checkmate() {
            Some(Outcome::Checkmate {
                winner: position.side_to_move().other(),
            })
        } else if position.is_stalemate() {
            Some(Outcome::Stalemate)
        } else if position.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if position.is_seventyfive_moves() {
            Some(Outcome::SeventyFiveMoves)
        } else if position.is_repetition(FIVEFOLD) {
            Some(Outcome::FivefoldRepetition)
        } else if position.can_claim_draw() {
            Some(Outcome::ClaimableDraw)
        } else {
            None
        }
    }

    /// Result string in PGN notation.
    pub fn result(self) -> &'static str {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            Outcome::MoveLimit => "*",
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate, {} wins", winner.name()),
            Outcome::Stalemate => write!(f, "Stalemate"),
            Outcome::InsufficientMaterial => write!(f, "Draw by insufficient material"),
            Outcome::SeventyFiveMoves => write!(f, "Draw by the seventy-five-move rule"),
            Outcome::FivefoldRepetition => write!(f, "Draw by fivefold repetition"),
            Outcome::ClaimableDraw => write!(f, "Draw claimed (threefold repetition or fifty-move rule)"),
            Outcome::MoveLimit => write!(f, "Move limit reached"),
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: Outcome,
    /// Plies played
    pub moves: u32,
    /// Every move played, in UCI notation
    pub history: Vec<String>,
    pub white_score: i32,
    pub black_score: i32,
    pub elapsed: Duration,
}

/// Plays games between two engines on a shared board.
pub struct GameRunner {
    max_moves: Option<u32>,
    /// Print the board and scores after every move
    verbose: bool,
}

impl GameRunner {
    pub fn new(max_moves: Option<u32>, verbose: bool) -> Self {
        Self { max_moves, verbose }
    }

    /// Plays until the game is decided or the ply limit is hit.
    ///
    /// The endgame flag is refreshed before every move so both searches see
    /// the phase of the position they start from.
    pub fn play<R: RulesEngine>(
        &self,
        board: &mut ScoreBoard<R>,
        white: &mut dyn Engine<R>,
        black: &mut dyn Engine<R>,
    ) -> Result<GameReport> {
        let start = Instant::now();
        white.new_game();
        black.new_game();

        if self.verbose {
            println!("{}", display::render(board.position()));
            println!();
        }

        let mut moves = 0;
        let mut history = Vec::new();
        let outcome = loop {
            if let Some(outcome) = Outcome::of(board.position()) {
                break outcome;
            }
            if self.max_moves.is_some_and(|limit| moves >= limit) {
                break Outcome::MoveLimit;
            }

            board.refresh_endgame();
            let color = board.side_to_move();
            let player: &mut dyn Engine<R> = match color {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let failure = format!("{} ({}) failed to move", player.name(), color.name());
            let mv = player.choose_move(board).context(failure.clone())?;
            // Formatted before the push: castling notation reads the board.
            let text = board.position().move_text(mv);
            board.push(mv).context(failure)?;
            moves += 1;

            info!(
                ply = moves,
                side = color.name(),
                player = player.name(),
                mv = %text,
                white_score = board.white_score(),
                black_score = board.black_score(),
                "move played"
            );
            if self.verbose {
                println!("{}. {} plays {}", moves, color.name(), text);
                println!("{}", display::render(board.position()));
                println!("{}", display::score_line(board));
                println!();
            }
            history.push(text);
        };

        let report = GameReport {
            outcome,
            moves,
            history,
            white_score: board.white_score(),
            black_score: board.black_score(),
            elapsed: start.elapsed(),
        };
        info!(
            result = report.outcome.result(),
            moves = report.moves,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "game over"
        );
        Ok(report)
    }
}

/// Builds the player for one side from the config.
pub fn create_player(kind: PlayerKind, color: Color, config: &PlayConfig) -> Box<dyn Engine<CozyPosition>> {
    match kind {
        PlayerKind::Minimax => {
            Box::new(MinimaxEngine::new(config.depth).with_ordering(config.move_ordering))
        }
        PlayerKind::Random => {
            let engine = match config.seed {
                // Offset by color so two random players do not mirror each other.
                Some(seed) => SamplingEngine::with_seed(config.samples(), seed.wrapping_add(color.idx() as u64)),
                None => SamplingEngine::new(config.samples()),
            };
            Box::new(engine.with_keying(config.sample_keying))
        }
        PlayerKind::Human => Box::new(HumanPlayer::stdin()),
    }
}

/// Board for the configured starting position.
///
/// A custom FEN charges each side for the material it is missing, so the
/// scores read as if the game had started from the standard position.
pub fn starting_board(config: &PlayConfig) -> Result<ScoreBoard<CozyPosition>> {
    let position = match &config.fen {
        Some(fen) => CozyPosition::from_fen(fen)?,
        None => CozyPosition::startpos(),
    };
    Ok(ScoreBoard::from_position(position))
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
