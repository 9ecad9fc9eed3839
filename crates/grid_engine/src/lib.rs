//! Pure turn-based grid game logic.
//!
//! Two players alternate placing marks on an `N`×`N` board until one of
//! them completes a row, column or main diagonal, or the board fills up.
//! `N = 3` is tic-tac-toe.
//!
//! The engine does no I/O. State is an explicit [`GameState`] value owned
//! by the caller and threaded through [`GridGameEngine::apply_move`].
//!
//! # Example
//!
//! ```
//! use grid_engine::{GameStatus, MoveError, Player, TicTacToe};
//!
//! let state = TicTacToe::new_game();
//! let state = TicTacToe::apply_move(&state, 4)?;
//! assert_eq!(state.current_player(), Player::B);
//!
//! assert_eq!(
//!     TicTacToe::apply_move(&state, 4),
//!     Err(MoveError::CellOccupied { index: 4 })
//! );
//! assert_eq!(state.status(), GameStatus::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{GridGameEngine, TicTacToe};
pub use error::{MoveError, ReplayError};
pub use types::{Board, Cell, GameState, GameStatus, Player};
