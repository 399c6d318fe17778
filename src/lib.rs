//! # connect-cube
//!
//! A connect-K engine for a flat N×N grid and for a cube of six N×N faces,
//! with a three-tier computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Surface-Agnostic**: Detection, heuristics and search are written
//!    against the `Surface` and `Topology` traits. The cube is not a special
//!    case anywhere above the topology layer.
//!
//! 2. **Table-Driven Cube**: Face adjacency is a constant seam table keyed
//!    by `(face, edge)`, checked by a round-trip validation before any cube
//!    game starts.
//!
//! 3. **Pure Decisions**: Computing the opponent's move never mutates the
//!    game; its randomness is a stream keyed by the game seed and move
//!    number.
//!
//! ## Architecture
//!
//! - **Lines and Bands**: Cube wins are found both by walking runs across
//!   seams and by scanning the closed loops around the cube circularly.
//!
//! - **Persistent History**: Move history is an `im::Vector`, so game
//!   snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Marks, sides, configuration, RNG, errors
//! - `topology`: Faces, headings, flat and cube adjacency
//! - `board`: Flat and cube mark storage, cell references
//! - `rules`: `Surface` trait and win detection
//! - `ai`: Heuristic scoring, alpha-beta minimax, tiered move selection
//! - `game`: Turn state machine, tally, session
//!
//! ## Example
//!
//! ```
//! use connect_cube::{CellRef, Difficulty, GameConfig, MoveOutcome, Session};
//!
//! let config = GameConfig::flat(3).with_difficulty(Difficulty::Hard).with_seed(1);
//! let mut session = Session::new(config).unwrap();
//!
//! assert_eq!(session.apply_player_move(CellRef::Flat(0)), MoveOutcome::Applied);
//! let reply = session.compute_opponent_move().unwrap();
//! assert_eq!(reply, CellRef::Flat(4));
//! session.apply_opponent_move(reply);
//! ```

pub mod core;
pub mod topology;
pub mod board;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Mark, Side,
    Difficulty, GameConfig, Variant,
    GameRng,
    Error, IllegalMove, Result,
};

pub use crate::topology::{
    Direction, Face, Heading, Line,
    Topology, FlatTopology, CubeTopology, CubeCell,
};

pub use crate::board::{Board, CellRef, CubeBoard};

pub use crate::rules::{GameResult, Surface};

pub use crate::ai::{
    Decision, MoveSelector, Reason,
    SearchConfig, SearchResult, SearchStats,
};

pub use crate::game::{GameState, MoveOutcome, MoveRecord, Phase, Playfield, Session, Tally};
