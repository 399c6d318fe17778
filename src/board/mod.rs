//! Board storage for both surfaces.
//!
//! `Board` is a row-major grid of marks; `CubeBoard` is six of them indexed
//! by face. Neither knows about winning; detection lives in `rules`.

pub mod flat;
pub mod cube;

use serde::{Deserialize, Serialize};

pub use cube::CubeBoard;
pub use flat::Board;

use crate::core::{Error, Result};
use crate::topology::CubeCell;

/// A cell on either surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRef {
    /// Row-major index on the flat grid.
    Flat(usize),
    /// Face and row-major index on the cube.
    Cube(CubeCell),
}

impl CellRef {
    /// The flat index, if this is a flat cell.
    #[must_use]
    pub fn as_flat(self) -> Option<usize> {
        match self {
            CellRef::Flat(index) => Some(index),
            CellRef::Cube(_) => None,
        }
    }

    /// The cube cell, if this is a cube cell.
    #[must_use]
    pub fn as_cube(self) -> Option<CubeCell> {
        match self {
            CellRef::Flat(_) => None,
            CellRef::Cube(cell) => Some(cell),
        }
    }
}

impl From<usize> for CellRef {
    fn from(index: usize) -> Self {
        CellRef::Flat(index)
    }
}

impl From<CubeCell> for CellRef {
    fn from(cell: CubeCell) -> Self {
        CellRef::Cube(cell)
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellRef::Flat(index) => write!(f, "{}", index),
            CellRef::Cube(cell) => write!(f, "{}", cell),
        }
    }
}

impl std::str::FromStr for CellRef {
    type Err = Error;

    /// `4` is a flat cell, `front:4` a cube cell.
    fn from_str(s: &str) -> Result<Self> {
        if s.contains(':') {
            return Ok(CellRef::Cube(s.parse()?));
        }
        s.trim()
            .parse()
            .map(CellRef::Flat)
            .map_err(|_| Error::InvalidParameters(format!("bad cell '{}'", s)))
    }
}
