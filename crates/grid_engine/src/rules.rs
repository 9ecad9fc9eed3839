//! Win detection for grid games.
//!
//! Pure functions over a [`Board`]. A line is a full row, a full column or
//! one of the two main diagonals, so an `N`×`N` board has `2N + 2` lines.

use crate::types::{Board, Cell, Player};

/// Enumerates every line on an `N`×`N` board as cell indices.
pub fn lines<const N: usize>() -> impl Iterator<Item = [usize; N]> {
    let rows = (0..N).map(|row| std::array::from_fn::<usize, N, _>(move |col| row * N + col));
    let cols = (0..N).map(|col| std::array::from_fn::<usize, N, _>(move |row| row * N + col));
    let diagonal = std::iter::once(std::array::from_fn::<usize, N, _>(|i| i * N + i));
    let anti_diagonal =
        std::iter::once(std::array::from_fn::<usize, N, _>(|i| i * N + (N - 1 - i)));

    rows.chain(cols).chain(diagonal).chain(anti_diagonal)
}

/// Checks whether `player` has completed any line.
pub fn has_line<const N: usize>(board: &Board<N>, player: Player) -> bool {
    N > 0
        && lines::<N>().any(|line| {
            line.iter()
                .all(|&index| board.get(index) == Some(Cell::Occupied(player)))
        })
}

/// Returns the winner, giving priority to `last_mover`.
///
/// Only the player who just moved can have completed a new line, so when
/// both marks somehow hold a line the mover is credited.
pub fn winner<const N: usize>(board: &Board<N>, last_mover: Player) -> Option<Player> {
    [last_mover, last_mover.opponent()]
        .into_iter()
        .find(|&player| has_line(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with<const N: usize>(marks: &[(usize, Player)]) -> Board<N> {
        let mut board = Board::new();
        for &(index, player) in marks {
            board.place(index, player);
        }
        board
    }

    #[test]
    fn test_three_by_three_has_eight_lines() {
        let all: Vec<[usize; 3]> = lines::<3>().collect();
        assert_eq!(all.len(), 8);
        assert!(all.contains(&[0, 1, 2]));
        assert!(all.contains(&[2, 5, 8]));
        assert!(all.contains(&[0, 4, 8]));
        assert!(all.contains(&[2, 4, 6]));
    }

    #[test]
    fn test_four_by_four_diagonals() {
        let all: Vec<[usize; 4]> = lines::<4>().collect();
        assert_eq!(all.len(), 10);
        assert!(all.contains(&[0, 5, 10, 15]));
        assert!(all.contains(&[3, 6, 9, 12]));
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::<3>::new();
        assert_eq!(winner(&board, Player::A), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with::<3>(&[(0, Player::A), (1, Player::A), (2, Player::A)]);
        assert_eq!(winner(&board, Player::A), Some(Player::A));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with::<3>(&[(1, Player::B), (4, Player::B), (7, Player::B)]);
        assert!(has_line(&board, Player::B));
        assert!(!has_line(&board, Player::A));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with::<3>(&[(2, Player::B), (4, Player::B), (6, Player::B)]);
        assert_eq!(winner(&board, Player::B), Some(Player::B));
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with::<3>(&[(0, Player::A), (1, Player::A), (2, Player::B)]);
        assert_eq!(winner(&board, Player::A), None);
    }

    #[test]
    fn test_mover_credited_when_both_have_lines() {
        let board = board_with::<3>(&[
            (0, Player::A),
            (1, Player::A),
            (2, Player::A),
            (6, Player::B),
            (7, Player::B),
            (8, Player::B),
        ]);
        assert_eq!(winner(&board, Player::B), Some(Player::B));
        assert_eq!(winner(&board, Player::A), Some(Player::A));
    }

    #[test]
    fn test_larger_board_needs_full_line() {
        let board = board_with::<4>(&[(0, Player::A), (1, Player::A), (2, Player::A)]);
        assert!(!has_line(&board, Player::A));
    }
}
