//! Core types: marks and sides, configuration, RNG, errors.
//!
//! Everything here is surface-agnostic; the flat and cube variants build on
//! these without adding their own variants of the basics.

pub mod mark;
pub mod config;
pub mod rng;
pub mod error;

pub use mark::{Mark, Side};
pub use config::{Difficulty, GameConfig, Variant, CUBE_SIZES, FLAT_SIZES, MIN_WIN_LENGTH};
pub use rng::GameRng;
pub use error::{Error, IllegalMove, Result};
