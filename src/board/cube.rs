//! Six-face cube board.

use serde::{Deserialize, Serialize};

use super::Board;
use crate::core::{IllegalMove, Mark, Side};
use crate::topology::{CubeCell, CubeTopology, Face};

/// Six flat boards of the same size, indexed by [`Face::index`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeBoard {
    size: usize,
    faces: [Board; 6],
}

impl CubeBoard {
    /// Empty cube.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            faces: std::array::from_fn(|_| Board::new(size)),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn topology(&self) -> CubeTopology {
        CubeTopology::new(self.size)
    }

    /// One face's grid.
    #[must_use]
    pub fn face(&self, face: Face) -> &Board {
        &self.faces[face.index()]
    }

    /// Replace one face's grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid size differs from the cube's.
    pub fn set_face(&mut self, face: Face, board: Board) {
        assert_eq!(board.size(), self.size, "face size must match cube size");
        self.faces[face.index()] = board;
    }

    /// Mark at `cell`, `None` if the index is off the face.
    #[must_use]
    pub fn get(&self, cell: CubeCell) -> Option<Mark> {
        self.face(cell.face).get(cell.index)
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    ///
    /// Panics if the index is off the face.
    pub fn set(&mut self, cell: CubeCell, mark: Mark) {
        self.faces[cell.face.index()].set(cell.index, mark);
    }

    /// Place a side's mark on an empty cell.
    pub fn place(&mut self, cell: CubeCell, side: Side) -> Result<(), IllegalMove> {
        match self.get(cell) {
            None => Err(IllegalMove::OutOfRange(cell.into())),
            Some(Mark::Empty) => {
                self.set(cell, side.mark());
                Ok(())
            }
            Some(_) => Err(IllegalMove::Occupied(cell.into())),
        }
    }

    /// Check if every cell on every face is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.faces.iter().all(Board::is_full)
    }

    /// Check if no cell is marked.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.faces.iter().all(Board::is_blank)
    }

    /// Empty cells on one face.
    #[must_use]
    pub fn empty_cells_on(&self, face: Face) -> Vec<CubeCell> {
        self.face(face)
            .empty_cells()
            .into_iter()
            .map(|index| CubeCell::new(face, index))
            .collect()
    }

    /// Empty cells, faces in [`Face::ALL`] order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<CubeCell> {
        Face::ALL.into_iter().flat_map(|face| self.empty_cells_on(face)).collect()
    }
}

impl std::fmt::Display for CubeBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in Face::ALL {
            writeln!(f, "{}:", face)?;
            write!(f, "{}", self.face(face))?;
        }
        Ok(())
    }
}
