//! Computer player with a fixed, deterministic heuristic.
//!
//! In order of preference: complete its own line, block the opponent's
//! line, take the center, take a corner, take the first empty cell.

use super::Seat;
use crate::console::Console;
use anyhow::{Context, Result};
use grid_engine::{Board, Cell, GameState, Player, rules};
use tracing::{debug, instrument};

/// Built-in opponent.
#[derive(Debug, Clone, derive_new::new)]
pub struct ComputerPlayer {
    #[new(into)]
    name: String,
}

impl ComputerPlayer {
    /// Picks a cell for `state.current_player()`, or `None` on a full board.
    #[instrument(skip_all, fields(player = %state.current_player()))]
    pub fn pick_move<const N: usize>(state: &GameState<N>) -> Option<usize> {
        let board = state.board();
        let me = state.current_player();

        if let Some(index) = completing_cell(board, me) {
            debug!(index, "Completing own line");
            return Some(index);
        }
        if let Some(index) = completing_cell(board, me.opponent()) {
            debug!(index, "Blocking opponent");
            return Some(index);
        }

        let center = (N % 2 == 1).then_some(N * N / 2);
        let corners = [0, N - 1, N * (N - 1), N * N - 1];
        center
            .into_iter()
            .chain(corners)
            .chain(0..N * N)
            .find(|&index| board.is_empty(index))
    }
}

/// Finds the empty cell that would give `player` a full line.
fn completing_cell<const N: usize>(board: &Board<N>, player: Player) -> Option<usize> {
    rules::lines::<N>().find_map(|line| {
        let mut empty = None;
        for &index in &line {
            match board.get(index) {
                Some(Cell::Occupied(owner)) if owner == player => {}
                Some(Cell::Empty) if empty.is_none() => empty = Some(index),
                _ => return None,
            }
        }
        empty
    })
}

impl<const N: usize> Seat<N> for ComputerPlayer {
    fn choose_move(&mut self, state: &GameState<N>, console: &mut Console<'_>) -> Result<i64> {
        let index = Self::pick_move(state).context("No empty cell left for the computer")?;
        console.say(&format!(
            "{} ({}) plays {}",
            self.name,
            state.current_player(),
            index
        ))?;
        Ok(i64::try_from(index)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
