//! Flat grid topology.

use super::{Direction, Heading, Topology};

/// Row-major N×N grid with no wrap-around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlatTopology {
    size: usize,
}

impl FlatTopology {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check if an index is on the grid.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// `(row, col)` of an index.
    #[must_use]
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Index of `(row, col)`.
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The cell at `(row + dr, col + dc)`, if on the grid.
    #[must_use]
    pub fn offset(&self, index: usize, heading: Heading) -> Option<usize> {
        let (row, col) = self.coords(index);
        let row = row.checked_add_signed(heading.dr as isize)?;
        let col = col.checked_add_signed(heading.dc as isize)?;
        (row < self.size && col < self.size).then(|| self.index(row, col))
    }

    /// Orthogonal neighbor.
    #[must_use]
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        self.offset(index, direction.outward())
    }
}

impl Topology for FlatTopology {
    type Cell = usize;

    fn size(&self) -> usize {
        self.size
    }

    fn cells(&self) -> Vec<usize> {
        (0..self.cell_count()).collect()
    }

    fn step(&self, cell: usize, heading: Heading) -> Option<(usize, Heading)> {
        self.offset(cell, heading).map(|next| (next, heading))
    }
}
