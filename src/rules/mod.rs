//! Win detection for both surfaces.
//!
//! `Surface` is the seam between storage and rules: the move selector and
//! the game state machine call `detect` and never inspect lines themselves.
//! `detect` returns a winner with its exact K-cell line, a tie once every
//! cell is marked, or `None` while play continues.

pub mod result;
pub mod surface;
pub mod flat;
pub mod band;
pub mod cube;

pub use result::GameResult;
pub use surface::Surface;
pub use flat::detect_flat;
pub use cube::{band_win, detect_cube, line_win};
