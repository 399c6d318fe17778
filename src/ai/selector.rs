//! Tiered opponent move selection.
//!
//! | Tier   | Procedure                                                  |
//! |--------|------------------------------------------------------------|
//! | easy   | random cell, active region first                           |
//! | medium | win, block, center, best potential score, random           |
//! | hard   | exhaustive minimax on small boards, medium otherwise       |
//!
//! Randomness comes only from the `GameRng` passed in; with the same
//! stream the same decision is made.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::config::SearchConfig;
use super::heuristic::best_scored;
use super::minimax::best_move;
use crate::core::{Difficulty, GameRng, Mark, Side};
use crate::rules::Surface;
use crate::topology::Topology;

/// Why a cell was chosen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum Reason {
    /// Completes a run for the selecting side.
    #[display("win")]
    Win,
    /// Stops the other side completing a run.
    #[display("block")]
    Block,
    /// Opening center on the 3×3 board.
    #[display("center")]
    Center,
    /// Highest potential-line score.
    #[display("heuristic")]
    Heuristic,
    /// Minimax search.
    #[display("search")]
    Search,
    /// Uniform random pick.
    #[display("random")]
    Random,
}

/// A selected cell and the rule that picked it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision<C> {
    pub cell: C,
    pub reason: Reason,
}

impl<C> Decision<C> {
    #[must_use]
    pub fn new(cell: C, reason: Reason) -> Self {
        Self { cell, reason }
    }

    /// Convert the cell type.
    #[must_use]
    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Decision<D> {
        Decision::new(f(self.cell), self.reason)
    }
}

/// Picks moves for one side at a fixed difficulty.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    difficulty: Difficulty,
    win_length: usize,
    side: Side,
    search: SearchConfig,
}

impl MoveSelector {
    /// Selector for the opponent seat.
    #[must_use]
    pub fn new(difficulty: Difficulty, win_length: usize) -> Self {
        Self {
            difficulty,
            win_length,
            side: Side::Opponent,
            search: SearchConfig::default(),
        }
    }

    /// Select for a different seat.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Override the minimax configuration.
    #[must_use]
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search = config;
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Choose a cell, or `None` if the surface is full.
    ///
    /// `active_region` is the region random picks try first (the active
    /// face on the cube).
    #[instrument(level = "debug", skip(self, surface, rng), fields(difficulty = %self.difficulty))]
    pub fn select<S: Surface>(&self, surface: &S, active_region: usize, rng: &mut GameRng) -> Option<Decision<S::Cell>> {
        let decision = match self.difficulty {
            Difficulty::Easy => self.random(surface, active_region, rng),
            Difficulty::Hard if surface.topology().cells().len() <= self.search.cell_limit => self.search(surface),
            Difficulty::Medium | Difficulty::Hard => self.tactical(surface, active_region, rng),
        }?;

        debug!(cell = %decision.cell, reason = %decision.reason, "move selected");
        Some(decision)
    }

    /// Win, block, center, heuristic, random.
    fn tactical<S: Surface>(&self, surface: &S, active_region: usize, rng: &mut GameRng) -> Option<Decision<S::Cell>> {
        let mut scratch = surface.clone();
        let empties = scratch.empty_cells();

        for (side, reason) in [(self.side, Reason::Win), (self.side.other(), Reason::Block)] {
            if let Some(&cell) = empties
                .iter()
                .find(|&&c| scratch.completes_line(c, side, self.win_length))
            {
                return Some(Decision::new(cell, reason));
            }
        }

        if let Some(cell) = surface.center().filter(|&c| surface.get(c) == Some(Mark::Empty)) {
            return Some(Decision::new(cell, Reason::Center));
        }

        if let Some((score, cells)) = best_scored(surface, self.side, self.win_length) {
            if score > 0 {
                if let Some(&cell) = rng.choose(&cells) {
                    return Some(Decision::new(cell, Reason::Heuristic));
                }
            }
        }

        self.random(surface, active_region, rng)
    }

    fn search<S: Surface>(&self, surface: &S) -> Option<Decision<S::Cell>> {
        best_move(surface, self.side, self.win_length, &self.search)
            .cell
            .map(|cell| Decision::new(cell, Reason::Search))
    }

    /// Uniform pick within the active region; if it is full, a random
    /// region with space, then a random cell in it.
    fn random<S: Surface>(&self, surface: &S, active_region: usize, rng: &mut GameRng) -> Option<Decision<S::Cell>> {
        let empties = surface.empty_cells();

        let local: Vec<S::Cell> = empties
            .iter()
            .copied()
            .filter(|&c| surface.region(c) == active_region)
            .collect();

        let pool = if local.is_empty() {
            let mut regions: Vec<usize> = empties.iter().map(|&c| surface.region(c)).collect();
            regions.dedup();
            let region = *rng.choose(&regions)?;
            empties.into_iter().filter(|&c| surface.region(c) == region).collect()
        } else {
            local
        };

        rng.choose(&pool).map(|&cell| Decision::new(cell, Reason::Random))
    }
}
