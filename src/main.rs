//! gridtoe - Unified CLI
//!
//! Variable-size tic-tac-toe, interactive or headless.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::cli::{Cli, Command};
use gridtoe::config::GameConfig;
use gridtoe::{replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Play { size, first } => tui::run(&config.with_overrides(size, first)),
        Command::Replay { size, first, moves } => {
            run_replay(&config.with_overrides(size, first), &moves)
        }
    }
}

/// Replays moves and prints the result to stdout; logs go to stderr.
fn run_replay(config: &GameConfig, moves: &[usize]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), "Replaying moves");
    let game = replay::replay(config, moves);
    println!("{}", replay::summary(&game));
    Ok(())
}
