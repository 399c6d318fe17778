//! A sequence of games sharing a tally.
//!
//! The session owns the current `GameState`, the `Tally` and a root RNG
//! that is forked for every new game. Parameter setters replace the game
//! and are refused once a mark is on the board; `reset` is always allowed
//! and keeps the parameters.

use tracing::{info, warn};

use super::state::{GameState, MoveOutcome};
use super::tally::Tally;
use crate::board::CellRef;
use crate::core::{Difficulty, Error, GameConfig, GameRng, Result, Variant};

/// Current game plus running tally.
#[derive(Clone, Debug)]
pub struct Session {
    game: GameState,
    tally: Tally,
    rng: GameRng,
}

impl Session {
    /// Start a session with its first game.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let game = GameState::with_rng(config, rng.fork())?;
        Ok(Self {
            game,
            tally: Tally::new(),
            rng,
        })
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.game.config()
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Zero the tally. The current game is untouched.
    pub fn reset_tally(&mut self) {
        info!(previous = %self.tally, "tally reset");
        self.tally.reset();
    }

    /// Fresh board with the same parameters.
    pub fn reset(&mut self) -> Result<()> {
        let config = self.game.config().clone();
        self.game = GameState::with_rng(config, self.rng.fork())?;
        Ok(())
    }

    /// Replace the game with one using `config`.
    ///
    /// Refused while marks are on the board.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        if !self.game.is_blank() {
            warn!("parameter change refused mid-game");
            return Err(Error::InvalidParameters(
                "parameters can only change before the first move".into(),
            ));
        }
        self.game = GameState::with_rng(config, self.rng.fork())?;
        Ok(())
    }

    /// Change the grid size, clamping the win length to the new maximum.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        let mut config = self.config().clone();
        config.size = size;
        self.new_game(config.clamp_win_length())
    }

    pub fn set_win_length(&mut self, win_length: usize) -> Result<()> {
        self.new_game(self.config().clone().with_win_length(win_length))
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.new_game(self.config().clone().with_difficulty(difficulty))
    }

    /// Switch surface. The size is pulled into the new surface's range and
    /// the win length clamped after it.
    pub fn set_variant(&mut self, variant: Variant) -> Result<()> {
        let mut config = self.config().clone();
        let sizes = variant.sizes();
        config.variant = variant;
        config.size = config.size.clamp(*sizes.start(), *sizes.end());
        self.new_game(config.clamp_win_length())
    }

    // === Moves ===

    pub fn apply_player_move(&mut self, cell: CellRef) -> MoveOutcome {
        let outcome = self.game.apply_player_move(cell);
        self.record(&outcome);
        outcome
    }

    pub fn apply_opponent_move(&mut self, cell: CellRef) -> MoveOutcome {
        let outcome = self.game.apply_opponent_move(cell);
        self.record(&outcome);
        outcome
    }

    /// The opponent's chosen cell, without applying it.
    pub fn compute_opponent_move(&self) -> Result<CellRef> {
        self.game.compute_opponent_move()
    }

    /// Compute and apply the opponent's move.
    pub fn play_opponent_turn(&mut self) -> Result<MoveOutcome> {
        let cell = self.game.compute_opponent_move()?;
        Ok(self.apply_opponent_move(cell))
    }

    fn record(&mut self, outcome: &MoveOutcome) {
        if let MoveOutcome::AppliedWithResult(result) = outcome {
            self.tally.record(result);
            info!(tally = %self.tally, "tally updated");
        }
    }
}
