//! Running score across games.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::rules::GameResult;

/// Wins per side and ties. Only grows until [`Tally::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub ties: u32,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record<C>(&mut self, result: &GameResult<C>) {
        match result.winner() {
            Some(Side::Player) => self.player_wins += 1,
            Some(Side::Opponent) => self.opponent_wins += 1,
            None => self.ties += 1,
        }
    }

    /// Wins for one side.
    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_wins,
            Side::Opponent => self.opponent_wins,
        }
    }

    /// Games counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.ties
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} / opponent {} / ties {}",
            self.player_wins, self.opponent_wins, self.ties
        )
    }
}
