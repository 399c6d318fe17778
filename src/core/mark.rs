//! Cell contents and the two sides of a game.
//!
//! ## Mark
//!
//! What a single cell holds: nothing, the player's mark, or the opponent's.
//!
//! ## Side
//!
//! The non-empty subset of `Mark`. Turns, winners and tallies are keyed by
//! `Side` so that "empty" can never win or move.

use serde::{Deserialize, Serialize};

/// One of the two participants.
///
/// The player is the human seat (`X`), the opponent is the engine (`O`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human seat, always moves first.
    Player,
    /// The engine-controlled seat.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// The mark this side places.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Opponent => Mark::Opponent,
        }
    }

    /// Conventional board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Opponent => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by [`Side::Player`].
    Player,
    /// Marked by [`Side::Opponent`].
    Opponent,
}

impl Mark {
    /// Check if the cell is free.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The side owning this mark, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Player => Some(Side::Player),
            Mark::Opponent => Some(Side::Opponent),
        }
    }

    /// Board symbol: `X`, `O`, or `.` for empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }

    /// Parse a board symbol. Accepts `X`, `O` and `.`/`_`/`-` for empty.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Mark::Player),
            'O' => Some(Mark::Opponent),
            '.' | '_' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        side.mark()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
