//! Configuration for a game
//!
//! Settings come from an optional TOML file; command-line flags take
//! priority over the file, which takes priority over the defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use minimax_engine::MoveOrdering;
use sampling_engine::SampleKeying;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// Who makes the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Alpha-beta search at the configured depth
    Minimax,
    /// Best of a few randomly sampled moves
    Random,
    /// Moves typed at the terminal in UCI notation
    Human,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Search depth for the minimax player
    pub depth: u32,
    /// Draws per move for the random player (defaults to `depth`)
    pub samples: Option<usize>,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Stop the game after this many plies
    pub max_moves: Option<u32>,
    pub move_ordering: MoveOrdering,
    pub sample_keying: SampleKeying,
    /// Seed for the random player; entropy when absent
    pub seed: Option<u64>,
    /// Starting position; the standard one when absent. Material missing
    /// from a full set counts as already captured.
    pub fen: Option<String>,
    pub log_level: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            samples: None,
            white: PlayerKind::Minimax,
            black: PlayerKind::Random,
            max_moves: None,
            move_ordering: MoveOrdering::default(),
            sample_keying: SampleKeying::default(),
            seed: None,
            fen: None,
            log_level: "warn".to_string(),
        }
    }
}

impl PlayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn samples(&self) -> usize {
        self.samples.unwrap_or(self.depth as usize)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("depth must be greater than 0");
        }
        if self.samples() == 0 {
            bail!("samples must be greater than 0");
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            bail!(
                "invalid log level '{}', expected one of off, trace, debug, info, warn, error",
                self.log_level
            );
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chess_play")]
#[command(about = "Play a game of chess between minimax, random sampling and a human")]
pub struct Cli {
    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search depth for the minimax player
    #[arg(long, short)]
    pub depth: Option<u32>,

    /// Moves sampled per turn by the random player
    #[arg(long, short)]
    pub samples: Option<usize>,

    /// Player for white
    #[arg(long, value_enum)]
    pub white: Option<PlayerKind>,

    /// Player for black
    #[arg(long, value_enum)]
    pub black: Option<PlayerKind>,

    /// Stop after this many plies
    #[arg(long)]
    pub max_moves: Option<u32>,

    /// Search captures and promotions first
    #[arg(long)]
    pub ordered: bool,

    /// Keep every sampled move instead of one per score
    #[arg(long)]
    pub all_samples: bool,

    /// Seed for the random player
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from this FEN instead of the initial position. Scores start
    /// lowered by the material each side lacks compared with a full set
    #[arg(long)]
    pub fen: Option<String>,

    /// Log level (off, trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Merges the flags over the config file (or the defaults).
    pub fn resolve(self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.samples.is_some() {
            config.samples = self.samples;
        }
        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if self.max_moves.is_some() {
            config.max_moves = self.max_moves;
        }
        if self.ordered {
            config.move_ordering = MoveOrdering::ByMoveValue;
        }
        if self.all_samples {
            config.sample_keying = SampleKeying::AllSamples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.fen.is_some() {
            config.fen = self.fen;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
