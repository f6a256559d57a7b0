//! chess_play CLI
//!
//! Examples:
//!   chess_play --white minimax --black random --depth 3
//!   chess_play --white human --black minimax --ordered
//!   chess_play --config game.toml --seed 7

use anyhow::Result;
use chess_core::Color;
use chess_play::{create_player, starting_board, Cli, GameRunner};
use clap::Parser;
use tracing::info;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = Cli::parse().resolve()?;
    init_tracing(&config.log_level);
    info!(?config, "configuration loaded");

    let mut board = starting_board(&config)?;
    let mut white = create_player(config.white, Color::White, &config);
    let mut black = create_player(config.black, Color::Black, &config);

    println!("=== {} (White) vs {} (Black) ===", white.name(), black.name());
    println!(
        "Depth: {}, Samples: {}",
        config.depth,
        config.samples()
    );
    println!();

    let runner = GameRunner::new(config.max_moves, true);
    let report = runner.play(&mut board, white.as_mut(), black.as_mut())?;

    println!("=== Game Over ===");
    println!("{}", report.outcome);
    println!("Result: {}", report.outcome.result());
    println!("Moves played: {}", report.moves);
    println!("Moves: {}", report.history.join(" "));
    println!("Final material: White {}, Black {}", report.white_score, report.black_score);
    println!("Time: {:.2}s", report.elapsed.as_secs_f64());

    Ok(())
}
