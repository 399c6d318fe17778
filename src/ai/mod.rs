//! Opponent decision engine.
//!
//! ## Key Types
//!
//! - `MoveSelector`: tiered entry point returning a `Decision`
//! - `Minimax`: alpha-beta search with explicit bounds and node statistics
//! - `potential` / `best_scored`: the potential-line heuristic
//!
//! Everything here is generic over `Surface`, so the cube gets the same
//! tiers as the flat board with windows that follow face crossings.

pub mod config;
pub mod stats;
pub mod heuristic;
pub mod minimax;
pub mod selector;

pub use config::SearchConfig;
pub use stats::SearchStats;
pub use heuristic::{best_scored, potential};
pub use minimax::{best_move, Minimax, SearchResult};
pub use selector::{Decision, MoveSelector, Reason};
