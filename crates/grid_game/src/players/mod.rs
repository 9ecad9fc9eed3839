//! Seat trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use grid_engine::GameState;

/// Something that can occupy one side of the board.
pub trait Seat<const N: usize> {
    /// Chooses a cell index for the current player.
    ///
    /// The index is not validated; the session hands it to the engine and
    /// asks again if it is rejected.
    fn choose_move(&mut self, state: &GameState<N>, console: &mut Console<'_>) -> Result<i64>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;

    /// Whether rejected moves should be retried rather than treated as bugs.
    fn retries_rejected_moves(&self) -> bool {
        false
    }
}
