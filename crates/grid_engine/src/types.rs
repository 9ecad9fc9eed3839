//! Core domain types for grid games.

use std::fmt;

/// One of the two seats in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Player {
    /// Player A (moves first, marks `X`).
    #[display("X")]
    A,
    /// Player B (moves second, marks `O`).
    #[display("O")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Occupied(Player),
}

/// Square `N`×`N` board, addressed by row-major index `0..N*N`.
///
/// The board has a fixed size for its whole lifetime. Cells only ever go
/// from [`Cell::Empty`] to [`Cell::Occupied`]; the engine is the only code
/// that places marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Gets the cell at the given index, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        if index >= Self::CELLS {
            return None;
        }
        Some(self.cells[index / N][index % N])
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `player`'s mark. Callers validate the index and emptiness first.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        if index < Self::CELLS {
            self.cells[index / N][index % N] = Cell::Occupied(player);
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Indices of the cells nobody has played yet.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells()
            .enumerate()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| *cell != Cell::Empty).count()
    }

    /// Checks if every cell carries a mark.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| cell != Cell::Empty)
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with empty cells labelled by their index, so a human
/// can read off which number to type.
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = Self::CELLS.saturating_sub(1).to_string().len();
        let divider = vec!["-".repeat(width + 2); N].join("+");

        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
                writeln!(f, "{divider}")?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, " {:>width$} ", row_index * N + col_index)?,
                    Cell::Occupied(player) => write!(f, " {:>width$} ", player.to_string())?,
                }
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(Player),
    /// Board filled up without a line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {player} wins!"),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Complete game state.
///
/// A plain value: the engine takes it by reference and hands back a new
/// one, so the caller's copy never changes behind its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState<const N: usize> {
    pub(crate) board: Board<N>,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) status: GameStatus,
}

impl<const N: usize> GameState<N> {
    /// Creates a fresh game: empty board, player A to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the player to move (or the last mover, once terminal).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns how many moves have been applied.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has reached a win or draw.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl<const N: usize> Default for GameState<N> {
    fn default() -> Self {
        Self::new()
    }
}
