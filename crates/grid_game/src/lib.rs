//! Grid Game library - console driver for the grid game engine
//!
//! # Architecture
//!
//! - **Session**: the prompt / validate / retry loop around the engine
//! - **Players**: human (console input) and computer seats
//! - **Config**: defaults, TOML file and CLI flags
//! - **Scoreboard**: tally across rounds
//!
//! # Example
//!
//! ```
//! use grid_game::{GameConfig, Session};
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = Cursor::new("0\n3\n1\n4\n2\n");
//! let config = GameConfig::default();
//! let mut session = Session::<3, _, _>::from_config(&config, input, Vec::<u8>::new());
//! let state = session.play_game()?;
//! assert!(state.is_over());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
mod players;
mod scoreboard;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, MAX_SIZE, MIN_SIZE, Mark, Opponent};
pub use console::Console;
pub use players::{ComputerPlayer, HumanPlayer, Seat};
pub use scoreboard::Scoreboard;
pub use session::{Session, replay_transcript};
