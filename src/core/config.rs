//! Game configuration types.
//!
//! A game is configured at start by providing:
//! - `Variant`: flat grid or six-face cube
//! - `Difficulty`: opponent tier
//! - `GameConfig`: combines size, win length, difficulty and seed
//!
//! `GameConfig::validate` is the single gate for parameter ranges; the win
//! detector assumes a validated config.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Shortest winning run on any surface.
pub const MIN_WIN_LENGTH: usize = 3;

/// Grid sizes allowed on the flat board.
pub const FLAT_SIZES: std::ops::RangeInclusive<usize> = 3..=7;

/// Grid sizes allowed per cube face.
pub const CUBE_SIZES: std::ops::RangeInclusive<usize> = 3..=6;

/// Playing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// A single N×N grid.
    #[default]
    Flat,
    /// Six N×N faces joined like a real cube.
    Cube,
}

impl Variant {
    /// Allowed grid sizes for this surface.
    #[must_use]
    pub fn sizes(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Variant::Flat => FLAT_SIZES,
            Variant::Cube => CUBE_SIZES,
        }
    }

    /// Longest straight run the surface can hold at this size.
    ///
    /// On the cube a run may cross into neighboring faces, so it can reach
    /// `2 * size - 2` cells.
    #[must_use]
    pub fn max_win_length(self, size: usize) -> usize {
        match self {
            Variant::Flat => size,
            Variant::Cube => (2 * size).saturating_sub(2),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Flat => write!(f, "flat"),
            Variant::Cube => write!(f, "cube"),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Variant::Flat),
            "cube" => Ok(Variant::Cube),
            other => Err(Error::InvalidParameters(format!("unknown variant '{}'", other))),
        }
    }
}

/// Opponent strength tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Win, block, then potential-line heuristic.
    #[default]
    Medium,
    /// Exhaustive minimax on small boards, medium otherwise.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::InvalidParameters(format!("unknown difficulty '{}'", other))),
        }
    }
}

/// Complete game parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playing surface.
    pub variant: Variant,

    /// Cells per side of the grid (per face on the cube).
    pub size: usize,

    /// Consecutive marks needed to win.
    pub win_length: usize,

    /// Opponent tier.
    pub difficulty: Difficulty,

    /// RNG seed. `None` draws a fresh seed when the game starts.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::flat(3)
    }
}

impl GameConfig {
    /// Flat board of the given size, win length equal to the size.
    #[must_use]
    pub fn flat(size: usize) -> Self {
        Self {
            variant: Variant::Flat,
            size,
            win_length: size.max(MIN_WIN_LENGTH),
            difficulty: Difficulty::default(),
            seed: None,
        }
    }

    /// Cube with faces of the given size, win length 3.
    #[must_use]
    pub fn cube(size: usize) -> Self {
        Self {
            variant: Variant::Cube,
            size,
            win_length: MIN_WIN_LENGTH,
            difficulty: Difficulty::default(),
            seed: None,
        }
    }

    /// Set the win length.
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Longest run realizable on this surface and size.
    #[must_use]
    pub fn max_win_length(&self) -> usize {
        self.variant.max_win_length(self.size)
    }

    /// Pull the win length back into range after a size change.
    #[must_use]
    pub fn clamp_win_length(mut self) -> Self {
        self.win_length = self.win_length.clamp(MIN_WIN_LENGTH, self.max_win_length().max(MIN_WIN_LENGTH));
        self
    }

    /// Cells on a single face (the whole board when flat).
    #[must_use]
    pub fn cells_per_face(&self) -> usize {
        self.size * self.size
    }

    /// Check every range constraint.
    pub fn validate(&self) -> Result<()> {
        let sizes = self.variant.sizes();
        if !sizes.contains(&self.size) {
            return Err(Error::InvalidParameters(format!(
                "{} size {} is outside {}..={}",
                self.variant,
                self.size,
                sizes.start(),
                sizes.end()
            )));
        }

        let max = self.max_win_length();
        if self.win_length < MIN_WIN_LENGTH || self.win_length > max {
            return Err(Error::InvalidParameters(format!(
                "win length {} is outside {}..={} for a {} of size {}",
                self.win_length, MIN_WIN_LENGTH, max, self.variant, self.size
            )));
        }

        Ok(())
    }
}
