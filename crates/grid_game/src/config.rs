//! Game configuration: defaults, TOML file, then command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use grid_engine::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest supported board side.
pub const MIN_SIZE: usize = 3;

/// Largest supported board side.
pub const MAX_SIZE: usize = 5;

/// Who sits opposite player X.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Opponent {
    /// Two humans share the console.
    #[default]
    Human,
    /// The built-in computer player takes one seat.
    Computer,
}

/// A seat named by its mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    #[default]
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::A,
            Mark::O => Player::B,
        }
    }
}

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length.
    size: usize,

    /// Opponent for player X.
    opponent: Opponent,

    /// Seat taken by the computer when `opponent = "computer"`.
    computer_plays: Mark,

    /// Number of games to play.
    rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: MIN_SIZE,
            opponent: Opponent::default(),
            computer_plays: Mark::default(),
            rounds: 1,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, rounds = config.rounds, "Config loaded");
        Ok(config)
    }

    /// Resolves defaults, the optional config file, then CLI flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(size) = cli.size {
            config.size = size;
        }
        if let Some(opponent) = cli.opponent {
            config.opponent = opponent;
        }
        if let Some(mark) = cli.computer_plays {
            config.computer_plays = mark;
        }
        if let Some(rounds) = cli.rounds {
            config.rounds = rounds;
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::new(format!(
                "Board size must be between {} and {}, got {}",
                MIN_SIZE, MAX_SIZE, self.size
            )));
        }
        if self.rounds == 0 {
            return Err(ConfigError::new("Rounds must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Seat the computer takes, if it plays at all.
    pub fn computer_seat(&self) -> Option<Player> {
        match self.opponent {
            Opponent::Human => None,
            Opponent::Computer => Some(self.computer_plays.into()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
