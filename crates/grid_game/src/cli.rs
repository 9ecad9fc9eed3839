//! Command-line interface for grid_game.

use crate::config::{Mark, Opponent};
use clap::Parser;
use std::path::PathBuf;

/// Grid Game - tic-tac-toe and bigger boards on the console
#[derive(Parser, Debug)]
#[command(name = "grid_game")]
#[command(about = "Play tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (3-5)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Who plays against X
    #[arg(short, long, value_enum)]
    pub opponent: Option<Opponent>,

    /// Seat taken by the computer opponent
    #[arg(long, value_enum)]
    pub computer_plays: Option<Mark>,

    /// Number of games to play
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Replay a comma-separated move list instead of playing interactively
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub moves: Option<Vec<i64>>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
