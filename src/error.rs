//! Errors reported when a move cannot be made
//!
//! A failed move never changes the game, so every variant is recoverable:
//! the caller reports it and asks for another move.

/// Why a move was rejected. Columns are 0-indexed; messages show them 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Dropping into a full column, or popping a coin the current player does not own
    #[error("{} -> Can't make a move on chosen column!", .column + 1)]
    IllegalMove { column: usize },

    #[error("column {} out of range, columns must be between 1 and {}", .column + 1, crate::WIDTH)]
    ColumnOutOfRange { column: usize },

    #[error("{} -> Popping coins is only allowed in PopOut!", .column + 1)]
    PopNotSupported { column: usize },

    #[error("the game is over, reset to play again")]
    GameOver,
}

impl MoveError {
    /// The column the rejected move targeted, if any
    pub fn column(&self) -> Option<usize> {
        match *self {
            MoveError::IllegalMove { column }
            | MoveError::ColumnOutOfRange { column }
            | MoveError::PopNotSupported { column } => Some(column),
            MoveError::GameOver => None,
        }
    }
}
