//! Error types.
//!
//! `IllegalMove` and `InvalidParameters` are recoverable: the caller
//! re-prompts and no state has changed. `TopologyDefect` means the cube
//! seam table is inconsistent, which is a programming error.

use derive_more::Display;

use super::Side;
use crate::board::CellRef;

/// Why a submitted move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(CellRef),

    /// The target cell does not exist on this board.
    #[display("cell {} is outside the board", _0)]
    OutOfRange(CellRef),

    /// The move was submitted for a side that is not on turn.
    #[display("it is not the {}'s turn", _0)]
    WrongTurn(Side),

    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

/// Crate error.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Error {
    /// Bad size / win length / difficulty combination, or a parameter
    /// change while marks are on the board.
    #[display("invalid parameters: {}", _0)]
    InvalidParameters(String),

    /// A move that the current state does not allow.
    #[display("illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// The cube seam table violates its own invariants.
    #[display("topology defect: {}", _0)]
    TopologyDefect(String),
}

impl std::error::Error for Error {}

impl From<IllegalMove> for Error {
    fn from(err: IllegalMove) -> Self {
        Error::IllegalMove(err)
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidParameters("win length 9 exceeds 7".to_string());
        assert_eq!(err.to_string(), "invalid parameters: win length 9 exceeds 7");

        let err: Error = IllegalMove::Occupied(CellRef::Flat(4)).into();
        assert_eq!(err.to_string(), "illegal move: cell 4 is already occupied");

        let err: Error = IllegalMove::WrongTurn(Side::Player).into();
        assert_eq!(err.to_string(), "illegal move: it is not the player's turn");
    }
}
