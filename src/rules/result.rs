//! Finished-game outcome.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::topology::Line;

/// Result of a completed game.
///
/// A game still in progress has no result; detectors return
/// `Option<GameResult<_>>` and use `None` for that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult<C> {
    /// One side completed a run. `line` holds exactly the winning
    /// window's cells in traversal order.
    Winner { side: Side, line: Line<C> },
    /// Every cell is marked and nobody won.
    Tie,
}

impl<C> GameResult<C> {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner { side, .. } => Some(*side),
            GameResult::Tie => None,
        }
    }

    /// Winning cells; empty for a tie.
    #[must_use]
    pub fn line(&self) -> &[C] {
        match self {
            GameResult::Winner { line, .. } => line,
            GameResult::Tie => &[],
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie)
    }

    /// Convert the line's cell type.
    #[must_use]
    pub fn map<D, F>(self, f: F) -> GameResult<D>
    where
        F: FnMut(C) -> D,
    {
        match self {
            GameResult::Winner { side, line } => GameResult::Winner {
                side,
                line: line.into_iter().map(f).collect(),
            },
            GameResult::Tie => GameResult::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_game_result_is_winner() {
        let result: GameResult<usize> = GameResult::Winner {
            side: Side::Opponent,
            line: smallvec![0, 1, 2],
        };
        assert!(result.is_winner(Side::Opponent));
        assert!(!result.is_winner(Side::Player));
        assert_eq!(result.line(), &[0, 1, 2]);

        let tie: GameResult<usize> = GameResult::Tie;
        assert!(tie.is_tie());
        assert_eq!(tie.winner(), None);
        assert!(tie.line().is_empty());
    }

    #[test]
    fn test_map_preserves_order() {
        let result: GameResult<usize> = GameResult::Winner {
            side: Side::Player,
            line: smallvec![6, 4, 2],
        };
        let mapped = result.map(|i| i * 10);
        assert_eq!(mapped.line(), &[60, 40, 20]);
    }

    #[test]
    fn test_serialization() {
        let result: GameResult<usize> = GameResult::Winner {
            side: Side::Player,
            line: smallvec![3, 4, 5],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
