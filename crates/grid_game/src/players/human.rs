//! Human player that types cell indices at the console.

use super::Seat;
use crate::console::Console;
use anyhow::{Result, bail};
use grid_engine::{Board, GameState};
use std::num::IntErrorKind;
use tracing::debug;

/// Human player reading moves from the console.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl<const N: usize> Seat<N> for HumanPlayer {
    fn choose_move(&mut self, state: &GameState<N>, console: &mut Console<'_>) -> Result<i64> {
        let last = Board::<N>::CELLS - 1;
        loop {
            let prompt = format!(
                "Player {}, choose a cell (0-{}): ",
                state.current_player(),
                last
            );
            let Some(line) = console.prompt(&prompt)? else {
                bail!("Input closed before the game finished");
            };

            match line.trim().parse::<i64>() {
                Ok(index) => return Ok(index),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Ok(i64::MAX),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => return Ok(i64::MIN),
                Err(e) => {
                    debug!(input = %line.trim(), error = %e, "Unparseable move");
                    console.say("Please enter a cell number.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn retries_rejected_moves(&self) -> bool {
        true
    }
}
