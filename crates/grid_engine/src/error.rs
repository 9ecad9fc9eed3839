//! Errors returned by the engine.
//!
//! Every variant is an expected outcome of bad input, not a fault. Drivers
//! report it and ask for another move.

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a cell on the board.
    #[display("Cell index out of bounds (must be 0-{})", cells.saturating_sub(1))]
    OutOfBounds {
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already carries a mark.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// Index of the occupied cell.
        index: usize,
    },

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// A move in a replayed sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move #{} rejected: {}", step + 1, error)]
pub struct ReplayError {
    /// Zero-based position of the failing move in the sequence.
    pub step: usize,
    /// Why the move was rejected.
    pub error: MoveError,
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
