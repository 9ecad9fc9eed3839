//! The engine: the only mutation path for a board.
//!
//! [`GridGameEngine`] carries no state of its own. Every operation takes a
//! [`GameState`] by reference and returns the successor, leaving the input
//! untouched. On error the caller still holds the exact state it passed in.

use crate::error::{MoveError, ReplayError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, GameStatus, GameState};
use std::marker::PhantomData;

/// Turn-based two-player engine for an `N`×`N` board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridGameEngine<const N: usize> {
    _board: PhantomData<Board<N>>,
}

/// The canonical 3×3 game.
pub type TicTacToe = GridGameEngine<3>;

impl<const N: usize> GridGameEngine<N> {
    /// Returns a fresh game: empty board, player A to move, no moves made.
    pub fn new_game() -> GameState<N> {
        GameState::new()
    }

    /// Applies the current player's move at `cell_index`.
    ///
    /// Any integer type is accepted. Negative or otherwise unrepresentable
    /// indices are reported as out of bounds, same as indices past the end.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::OutOfBounds`] if the index is outside `0..N*N`
    /// - [`MoveError::CellOccupied`] if the cell already has a mark
    pub fn apply_move<I>(state: &GameState<N>, cell_index: I) -> Result<GameState<N>, MoveError>
    where
        I: TryInto<usize>,
    {
        if state.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let cells = Board::<N>::CELLS;
        let index = cell_index
            .try_into()
            .ok()
            .filter(|&index| index < cells)
            .ok_or(MoveError::OutOfBounds { cells })?;

        if !state.board.is_empty(index) {
            return Err(MoveError::CellOccupied { index });
        }

        let mut next = *state;
        let mover = next.current_player;
        next.board.place(index, mover);
        next.move_count += 1;

        if let Some(winner) = rules::winner(&next.board, mover) {
            next.status = GameStatus::Won(winner);
        } else if next.move_count == cells {
            next.status = GameStatus::Draw;
        } else {
            next.current_player = mover.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "game invariants violated after move at {index}: {:?}",
            GameInvariants::check_all(&next)
        );

        Ok(next)
    }

    /// Plays `moves` in order from a fresh game.
    ///
    /// Stops at the first rejected move. Moves after a terminal state are
    /// rejected with [`MoveError::GameAlreadyOver`].
    pub fn replay<I>(moves: &[I]) -> Result<GameState<N>, ReplayError>
    where
        I: TryInto<usize> + Copy,
    {
        moves
            .iter()
            .enumerate()
            .try_fold(Self::new_game(), |state, (step, &cell_index)| {
                Self::apply_move(&state, cell_index).map_err(|error| ReplayError { step, error })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_first_move_marks_cell_and_flips_player() {
        let state = TicTacToe::new_game();
        let next = TicTacToe::apply_move(&state, 4).expect("empty board accepts center");

        assert_eq!(next.board().get(4), Some(Cell::Occupied(Player::A)));
        assert_eq!(next.current_player(), Player::B);
        assert_eq!(next.move_count(), 1);
        assert_eq!(next.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let state = TicTacToe::new_game();
        let _next = TicTacToe::apply_move(&state, 0).expect("legal");
        assert_eq!(state, TicTacToe::new_game());
    }

    #[test]
    fn test_out_of_bounds() {
        let state = TicTacToe::new_game();
        assert_eq!(
            TicTacToe::apply_move(&state, 9),
            Err(MoveError::OutOfBounds { cells: 9 })
        );
        assert_eq!(
            TicTacToe::apply_move(&state, -1i64),
            Err(MoveError::OutOfBounds { cells: 9 })
        );
        assert_eq!(
            TicTacToe::apply_move(&state, usize::MAX),
            Err(MoveError::OutOfBounds { cells: 9 })
        );
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let state = TicTacToe::replay(&[4]).expect("legal");
        assert_eq!(
            TicTacToe::apply_move(&state, 4),
            Err(MoveError::CellOccupied { index: 4 })
        );
    }

    #[test]
    fn test_terminal_checked_before_bounds() {
        let won = TicTacToe::replay(&[0, 3, 1, 4, 2]).expect("legal");
        assert_eq!(TicTacToe::apply_move(&won, 99), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_win_keeps_mover_as_current() {
        let won = TicTacToe::replay(&[0, 3, 1, 4, 2]).expect("legal");
        assert_eq!(won.status(), GameStatus::Won(Player::A));
        assert_eq!(won.current_player(), Player::A);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let state = TicTacToe::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal");
        assert_eq!(state.move_count(), 9);
        assert_eq!(state.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_ninth_move_beats_draw() {
        // X O X / X O O / X X O, ninth move completes the left column
        let state = TicTacToe::replay(&[0, 1, 3, 4, 2, 5, 7, 8, 6]).expect("legal");
        assert_eq!(state.move_count(), 9);
        assert_eq!(state.status(), GameStatus::Won(Player::A));
    }

    #[test]
    fn test_replay_reports_failing_step() {
        let err = TicTacToe::replay(&[0, 1, 0]).expect_err("duplicate cell");
        assert_eq!(err.step, 2);
        assert_eq!(err.error, MoveError::CellOccupied { index: 0 });
    }

    #[test]
    fn test_larger_board() {
        type Four = GridGameEngine<4>;
        let state = Four::replay(&[0, 4, 1, 5, 2, 6, 3]).expect("legal");
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        assert_eq!(state.move_count(), 7);
        assert_eq!(
            Four::apply_move(&Four::new_game(), 16),
            Err(MoveError::OutOfBounds { cells: 16 })
        );
    }
}
