//! Turn orchestration and scorekeeping.
//!
//! ## GameState
//!
//! One game: the playfield, the phase, the move history and the result.
//! Every placed mark is followed by win detection.
//!
//! ## Session
//!
//! A run of games with a shared `Tally`. Owns parameter changes and resets.

pub mod state;
pub mod tally;
pub mod session;

pub use state::{GameState, MoveOutcome, MoveRecord, Phase, Playfield};
pub use tally::Tally;
pub use session::Session;
