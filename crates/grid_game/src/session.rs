//! The console game loop.
//!
//! One [`Session`] owns the game state, both seats and the console streams.
//! Each turn it asks the seat to move, hands the answer to the engine and,
//! when the engine rejects it, reports the reason and asks again.

use crate::config::GameConfig;
use crate::console::Console;
use crate::players::{ComputerPlayer, HumanPlayer, Seat};
use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result, bail};
use grid_engine::{GameState, GridGameEngine, Player};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Console session for an `N`×`N` board.
pub struct Session<const N: usize, R, W> {
    seats: [Box<dyn Seat<N>>; 2],
    input: R,
    output: W,
    scoreboard: Scoreboard,
}

impl<const N: usize, R: BufRead, W: Write> Session<N, R, W> {
    /// Creates a session with explicit seats for X and O.
    pub fn new(x: Box<dyn Seat<N>>, o: Box<dyn Seat<N>>, input: R, output: W) -> Self {
        Self {
            seats: [x, o],
            input,
            output,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Seats players according to `config`.
    pub fn from_config(config: &GameConfig, input: R, output: W) -> Self {
        let seat = |player: Player| -> Box<dyn Seat<N>> {
            if config.computer_seat() == Some(player) {
                Box::new(ComputerPlayer::new("Computer"))
            } else {
                Box::new(HumanPlayer::new(format!("Player {player}")))
            }
        };
        Self::new(seat(Player::A), seat(Player::B), input, output)
    }

    /// Returns the running tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn console(&mut self) -> Console<'_> {
        Console::new(&mut self.input, &mut self.output)
    }

    /// Plays one game to a terminal status.
    #[instrument(skip(self), fields(size = N))]
    pub fn play_game(&mut self) -> Result<GameState<N>> {
        info!("Starting game");
        let mut state = GridGameEngine::<N>::new_game();
        self.console().say(&format!("\n{}\n", state.board()))?;

        while !state.is_over() {
            let player = state.current_player();
            let seat = &mut self.seats[seat_index(player)];
            let mut console = Console::new(&mut self.input, &mut self.output);
            let choice = seat.choose_move(&state, &mut console)?;

            match GridGameEngine::<N>::apply_move(&state, choice) {
                Ok(next) => {
                    debug!(%player, index = choice, moves = next.move_count(), "Move applied");
                    state = next;
                    console.say(&format!("\n{}\n", state.board()))?;
                }
                Err(err) if seat.retries_rejected_moves() => {
                    debug!(%player, index = choice, error = %err, "Move rejected");
                    console.say(&format!("{err}. Try again."))?;
                }
                Err(err) => {
                    warn!(%player, seat = seat.name(), error = %err, "Seat chose an illegal move");
                    bail!("{} chose an illegal move: {}", seat.name(), err);
                }
            }
        }

        info!(status = %state.status(), moves = state.move_count(), "Game over");
        self.console().say(&state.status().to_string())?;
        self.scoreboard.record(state.status());
        Ok(state)
    }

    /// Plays `rounds` games back to back, printing the score after each.
    #[instrument(skip(self))]
    pub fn play_rounds(&mut self, rounds: u32) -> Result<Scoreboard> {
        for round in 1..=rounds {
            if rounds > 1 {
                self.console().say(&format!("\n=== Round {round} of {rounds} ==="))?;
            }
            self.play_game()
                .with_context(|| format!("Round {round} did not finish"))?;
            if rounds > 1 {
                let score = self.scoreboard.to_string();
                self.console().say(&score)?;
            }
        }
        Ok(self.scoreboard)
    }
}

fn seat_index(player: Player) -> usize {
    match player {
        Player::A => 0,
        Player::B => 1,
    }
}

/// Replays a fixed move list and prints the resulting board and status.
#[instrument(skip(output))]
pub fn replay_transcript<const N: usize, W: Write>(
    moves: &[i64],
    mut output: W,
) -> Result<GameState<N>> {
    let state = GridGameEngine::<N>::replay(moves).context("Replay failed")?;
    writeln!(output, "{}\n", state.board()).context("Failed to write board")?;
    writeln!(output, "{}", state.status()).context("Failed to write status")?;
    info!(status = %state.status(), moves = state.move_count(), "Replay finished");
    Ok(state)
}
