//! Grid Game - console tic-tac-toe
//!
//! Plays one or more games on stdin/stdout, or replays a move list.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use grid_game::{Cli, GameConfig, Session, replay_transcript};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    info!(?config, "Starting grid_game");

    match *config.size() {
        3 => run::<3>(&cli, &config),
        4 => run::<4>(&cli, &config),
        5 => run::<5>(&cli, &config),
        size => bail!("Unsupported board size {size}"),
    }
}

/// Runs the requested mode on an `N`×`N` board.
#[instrument(skip_all, fields(size = N))]
fn run<const N: usize>(cli: &Cli, config: &GameConfig) -> Result<()> {
    if let Some(moves) = &cli.moves {
        replay_transcript::<N, _>(moves, io::stdout().lock())?;
        return Ok(());
    }

    let mut session =
        Session::<N, _, _>::from_config(config, io::stdin().lock(), io::stdout().lock());
    let score = session.play_rounds(*config.rounds())?;
    info!(%score, "Session finished");
    Ok(())
}
