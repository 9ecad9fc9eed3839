//! Tests for the grid game engine's public API.

use grid_engine::{Cell, GameStatus, GridGameEngine, MoveError, Player, TicTacToe};

#[test]
fn test_top_row_win_for_a() {
    let moves = [0, 3, 1, 4, 2];
    let state = TicTacToe::replay(&moves).expect("legal replay");

    assert_eq!(state.status(), GameStatus::Won(Player::A));
    assert_eq!(state.move_count(), 5);
    assert_eq!(state.status().winner(), Some(Player::A));
}

#[test]
fn test_win_for_b_on_diagonal() {
    let moves = [1, 0, 2, 4, 3, 8];
    let state = TicTacToe::replay(&moves).expect("legal replay");

    assert_eq!(state.status(), GameStatus::Won(Player::B));
    assert_eq!(state.move_count(), 6);
}

#[test]
fn test_draw() {
    let moves = [0, 4, 8, 1, 7, 6, 2, 5, 3];
    let state = TicTacToe::replay(&moves).expect("legal replay");

    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.move_count(), 9);
    assert!(state.board().is_full());
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let state = TicTacToe::replay(&[4, 0]).expect("legal replay");
    let before = state;

    let first = TicTacToe::apply_move(&state, 0);
    let second = TicTacToe::apply_move(&state, 0);

    assert_eq!(first, Err(MoveError::CellOccupied { index: 0 }));
    assert_eq!(first, second);
    assert_eq!(state, before);
    assert_eq!(state.move_count(), 2);
    assert_eq!(state.current_player(), Player::A);
}

#[test]
fn test_negative_index_is_out_of_bounds() {
    let state = TicTacToe::new_game();
    for index in [-1i32, -9, i32::MIN] {
        assert_eq!(
            TicTacToe::apply_move(&state, index),
            Err(MoveError::OutOfBounds { cells: 9 })
        );
    }
}

#[test]
fn test_no_moves_after_terminal() {
    let state = TicTacToe::replay(&[0, 3, 1, 4, 2]).expect("legal replay");
    let before = state;

    for index in 0..9usize {
        assert_eq!(
            TicTacToe::apply_move(&state, index),
            Err(MoveError::GameAlreadyOver)
        );
    }
    assert_eq!(state, before);
}

#[test]
fn test_replay_stops_after_win() {
    let err = TicTacToe::replay(&[0, 3, 1, 4, 2, 5]).expect_err("move after win");
    assert_eq!(err.step, 5);
    assert_eq!(err.error, MoveError::GameAlreadyOver);
}

#[test]
fn test_five_by_five_column_win() {
    type Five = GridGameEngine<5>;
    let moves = [2, 0, 7, 1, 12, 3, 17, 4, 22];
    let state = Five::replay(&moves).expect("legal replay");

    assert_eq!(state.status(), GameStatus::Won(Player::A));
    assert_eq!(state.board().get(22), Some(Cell::Occupied(Player::A)));
}
