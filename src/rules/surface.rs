//! Common interface over the flat board and the cube.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::GameResult;
use crate::board::CellRef;
use crate::core::{Mark, Side};
use crate::topology::Topology;

/// A playing surface: storage, adjacency and win detection.
///
/// The move selector and the game state machine are written against this
/// trait, so they never branch on flat versus cube.
///
/// ## Implementation Notes
///
/// - `detect`: bands and lines must both be checked every call
/// - `region`: groups cells for "prefer the active face" fallbacks; flat
///   boards are a single region
/// - `set`: raw write used by search; legality is checked by the caller
pub trait Surface: Clone + Debug {
    /// Cell reference type.
    type Cell: Copy + Eq + Hash + Debug + Display;

    /// Adjacency for this surface.
    type Topology: Topology<Cell = Self::Cell>;

    fn topology(&self) -> Self::Topology;

    /// Mark at `cell`, `None` if off the surface.
    fn get(&self, cell: Self::Cell) -> Option<Mark>;

    /// Overwrite a cell.
    fn set(&mut self, cell: Self::Cell, mark: Mark);

    /// Empty cells in scan order.
    fn empty_cells(&self) -> Vec<Self::Cell>;

    fn is_full(&self) -> bool;

    /// Winner, tie, or `None` while the game goes on.
    fn detect(&self, win_length: usize) -> Option<GameResult<Self::Cell>>;

    /// Wrap a cell for the outside world.
    fn cell_ref(cell: Self::Cell) -> CellRef;

    /// Region a cell belongs to.
    fn region(&self, _cell: Self::Cell) -> usize {
        0
    }

    /// Number of regions.
    fn region_count(&self) -> usize {
        1
    }

    /// Preferred opening cell, if the surface has one.
    fn center(&self) -> Option<Self::Cell> {
        None
    }

    /// Check if placing `side` at the empty `cell` wins immediately.
    ///
    /// The cell is restored before returning.
    fn completes_line(&mut self, cell: Self::Cell, side: Side, win_length: usize) -> bool {
        self.set(cell, side.mark());
        let won = self.detect(win_length).is_some_and(|r| r.is_winner(side));
        self.set(cell, Mark::Empty);
        won
    }
}
