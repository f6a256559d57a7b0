//! Console game driver
//!
//! Plays full games between the minimax engine, the sampling engine and a
//! human at the terminal, printing the board after every move.

pub mod config;
pub mod display;
pub mod game;
pub mod human;

pub use config::{Cli, PlayConfig, PlayerKind};
pub use game::{create_player, starting_board, GameReport, GameRunner, Outcome};
