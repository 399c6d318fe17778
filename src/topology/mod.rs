//! Board topology: how cells relate to each other.
//!
//! ## Flat
//!
//! `FlatTopology` is plain row/column arithmetic; stepping off the grid
//! has no continuation.
//!
//! ## Cube
//!
//! `CubeTopology` joins six faces through a constant seam table keyed by
//! `(face, edge)`. Lines crossing an edge continue on the neighboring face
//! with their heading re-expressed in that face's frame.
//!
//! Both implement `Topology`, which is all the win detector's line walker
//! and the opponent heuristic need.

pub mod face;
pub mod flat;
pub mod cube;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use smallvec::SmallVec;

pub use face::{Direction, Face, Heading};
pub use flat::FlatTopology;
pub use cube::{Band, BandAxis, CubeCell, CubeTopology, Seam, SEAMS};

/// An ordered run of cells. Winning lines never exceed `2 * 6 - 2` cells.
pub type Line<C> = SmallVec<[C; 10]>;

/// Cell adjacency for a playing surface.
pub trait Topology: Copy {
    /// Cell reference type.
    type Cell: Copy + Eq + Hash + Debug + Display;

    /// Cells per side of a grid.
    fn size(&self) -> usize;

    /// Every cell in scan order.
    fn cells(&self) -> Vec<Self::Cell>;

    /// One step along a line.
    ///
    /// Returns the next cell and the heading to keep walking with, which
    /// changes only when the step crosses onto another face. `None` means
    /// the line ends here.
    fn step(&self, cell: Self::Cell, heading: Heading) -> Option<(Self::Cell, Heading)>;

    /// Walk up to `max_steps` cells from `origin` (exclusive) while `keep`
    /// accepts them.
    ///
    /// Stops early at a discontinuity or when the walk would revisit a
    /// cell, so a loop around the cube never counts a cell twice.
    fn ray_while<F>(&self, origin: Self::Cell, heading: Heading, max_steps: usize, mut keep: F) -> Line<Self::Cell>
    where
        F: FnMut(Self::Cell) -> bool,
    {
        let mut out = Line::new();
        let mut cell = origin;
        let mut heading = heading;

        while out.len() < max_steps {
            match self.step(cell, heading) {
                Some((next, next_heading)) if next != origin && !out.contains(&next) && keep(next) => {
                    out.push(next);
                    cell = next;
                    heading = next_heading;
                }
                _ => break,
            }
        }

        out
    }

    /// Walk up to `max_steps` cells regardless of contents.
    fn ray(&self, origin: Self::Cell, heading: Heading, max_steps: usize) -> Line<Self::Cell> {
        self.ray_while(origin, heading, max_steps, |_| true)
    }

    /// Every `len`-cell line segment containing `cell`, along the four line
    /// orientations.
    fn windows_through(&self, cell: Self::Cell, len: usize) -> Vec<Line<Self::Cell>> {
        let mut windows = Vec::new();
        if len == 0 {
            return windows;
        }

        for heading in Heading::LINES {
            let back = self.ray(cell, heading.reversed(), len - 1);
            let forward = self.ray(cell, heading, len - 1);

            let mut full: Line<Self::Cell> = back.iter().rev().copied().collect();
            let origin = full.len();
            full.push(cell);
            full.extend(forward.iter().copied());

            if full.len() < len {
                continue;
            }

            let first = (origin + 1).saturating_sub(len);
            let last = origin.min(full.len() - len);
            for start in first..=last {
                windows.push(full[start..start + len].iter().copied().collect());
            }
        }

        windows
    }
}
