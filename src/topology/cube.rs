//! Six-face cube topology.
//!
//! ## Frames
//!
//! Every face is an N×N grid in its own row/column frame (see [`Face`]).
//! Leaving a face through an edge lands on the adjacent face at the cell
//! touching the departure cell, found through [`SEAMS`].
//!
//! ## Lines across seams
//!
//! A line heading is split into the component leaving through the edge and
//! the component running along it. On the new face the leaving component
//! points away from the entered edge and the along component follows the
//! entered edge, flipped when the seam reverses the edge position.
//!
//! Stepping diagonally off a corner (both coordinates leaving at once) has
//! no continuation: three faces meet there and no single next cell exists.
//!
//! ## Bands
//!
//! Rows of the four side faces form horizontal loops; columns of front,
//! top, back and bottom form vertical loops. Consecutive cells in a band
//! are always physically adjacent, including across the wrap.

use serde::{Deserialize, Serialize};
use tracing::error;

use super::{Direction, Face, Heading, Topology};
use crate::core::{Error, Result};

/// A cell on the cube: a face and a row-major index within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CubeCell {
    pub face: Face,
    pub index: usize,
}

impl CubeCell {
    #[must_use]
    pub const fn new(face: Face, index: usize) -> Self {
        Self { face, index }
    }
}

impl std::fmt::Display for CubeCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.face, self.index)
    }
}

impl std::str::FromStr for CubeCell {
    type Err = Error;

    /// Parse `face:index`, e.g. `top:7`.
    fn from_str(s: &str) -> Result<Self> {
        let (face, index) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidParameters(format!("expected face:index, got '{}'", s)))?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| Error::InvalidParameters(format!("bad cell index in '{}'", s)))?;
        Ok(Self::new(face.parse()?, index))
    }
}

/// Where an edge leads: the neighboring face, the edge of that face being
/// entered, and whether the position along the edge runs backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seam {
    pub face: Face,
    pub edge: Direction,
    pub reversed: bool,
}

const fn seam(face: Face, edge: Direction, reversed: bool) -> Seam {
    Seam { face, edge, reversed }
}

/// Edge adjacency, indexed `[face.index()][direction.index()]`.
pub const SEAMS: [[Seam; 4]; 6] = {
    use Direction::{Down, Left, Right, Up};
    use Face::{Back, Bottom, Front, Left as L, Right as R, Top};
    [
        // front
        [seam(Top, Down, false), seam(Bottom, Up, false), seam(L, Right, false), seam(R, Left, false)],
        // back
        [seam(Top, Up, true), seam(Bottom, Down, true), seam(R, Right, false), seam(L, Left, false)],
        // left
        [seam(Top, Left, false), seam(Bottom, Left, true), seam(Back, Right, false), seam(Front, Left, false)],
        // right
        [seam(Top, Right, true), seam(Bottom, Right, false), seam(Front, Right, false), seam(Back, Left, false)],
        // top
        [seam(Back, Up, true), seam(Front, Up, false), seam(L, Up, false), seam(R, Up, true)],
        // bottom
        [seam(Front, Down, false), seam(Back, Down, true), seam(L, Down, true), seam(R, Down, false)],
    ]
};

/// Orientation of a band loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandAxis {
    /// Row `index` of left, front, right, back.
    Horizontal,
    /// Column `index` of front, top, back, bottom (as seen on front).
    Vertical,
}

/// A closed loop of `4 * size` cells around the cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Band {
    pub axis: BandAxis,
    pub index: usize,
    pub cells: Vec<CubeCell>,
}

/// Cube of six N×N faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeTopology {
    size: usize,
}

impl CubeTopology {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Cells on one face.
    #[must_use]
    pub const fn cells_per_face(&self) -> usize {
        self.size * self.size
    }

    /// Check if a cell reference is on the cube.
    #[must_use]
    pub const fn contains(&self, cell: CubeCell) -> bool {
        cell.index < self.cells_per_face()
    }

    /// `(row, col)` of a cell within its face.
    #[must_use]
    pub const fn coords(&self, cell: CubeCell) -> (usize, usize) {
        (cell.index / self.size, cell.index % self.size)
    }

    /// Cell at `(row, col)` on `face`.
    #[must_use]
    pub const fn cell(&self, face: Face, row: usize, col: usize) -> CubeCell {
        CubeCell::new(face, row * self.size + col)
    }

    /// Seam leaving `face` through `edge`.
    #[must_use]
    pub const fn seam(face: Face, edge: Direction) -> Seam {
        SEAMS[face.index()][edge.index()]
    }

    /// Orthogonal neighbor, crossing onto the adjacent face at an edge.
    ///
    /// Always `Some` on a cube whose seam table validates.
    #[must_use]
    pub fn neighbor(&self, cell: CubeCell, direction: Direction) -> Option<CubeCell> {
        self.step(cell, direction.outward()).map(|(next, _)| next)
    }

    /// `(row + dr, col + dc)`, each coordinate `None` when it leaves the face.
    fn offset_in_face(&self, row: usize, col: usize, heading: Heading) -> (Option<usize>, Option<usize>) {
        let shift = |v: usize, d: i8| v.checked_add_signed(d as isize).filter(|&n| n < self.size);
        (shift(row, heading.dr), shift(col, heading.dc))
    }

    /// Leave `(row, col)` on `face` through `edge`, carrying `heading`.
    fn cross(&self, face: Face, row: usize, col: usize, edge: Direction, heading: Heading) -> (CubeCell, Heading) {
        let seam = Self::seam(face, edge);
        let last = self.size - 1;

        let along = match edge {
            Direction::Up | Direction::Down => col,
            Direction::Left | Direction::Right => row,
        };
        let along = if seam.reversed { last - along } else { along };

        let landing = match seam.edge {
            Direction::Up => self.cell(seam.face, 0, along),
            Direction::Down => self.cell(seam.face, last, along),
            Direction::Left => self.cell(seam.face, along, 0),
            Direction::Right => self.cell(seam.face, along, last),
        };

        let leaving = heading.dot(edge.outward());
        let sliding = heading.dot(edge.along());
        let sliding = if seam.reversed { -sliding } else { sliding };
        let turned = seam.edge.outward().combine(-leaving, seam.edge.along(), sliding);

        (landing, turned)
    }

    /// Check the seam table for consistency.
    ///
    /// Every seam must join two adjacent faces and be mirrored by the seam
    /// on the other side, and crossing an edge and stepping straight back
    /// must return to the starting cell.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::TopologyDefect("cube faces must be non-empty".into()));
        }

        for face in Face::ALL {
            for edge in Direction::ALL {
                let there = Self::seam(face, edge);
                if !face.is_adjacent(there.face) {
                    return Err(Error::TopologyDefect(format!(
                        "{} {:?} edge leads to non-adjacent face {}",
                        face, edge, there.face
                    )));
                }
                let back = Self::seam(there.face, there.edge);
                if back != seam(face, edge, there.reversed) {
                    return Err(Error::TopologyDefect(format!(
                        "{} {:?} edge is not mirrored by {} {:?}",
                        face, edge, there.face, there.edge
                    )));
                }
            }
        }

        for cell in self.cells() {
            for direction in Direction::ALL {
                let Some((next, heading)) = self.step(cell, direction.outward()) else {
                    return Err(Error::TopologyDefect(format!("no {:?} neighbor for {}", direction, cell)));
                };
                match self.step(next, heading.reversed()) {
                    Some((home, _)) if home == cell => {}
                    _ => {
                        return Err(Error::TopologyDefect(format!(
                            "stepping {:?} from {} does not return",
                            direction, cell
                        )))
                    }
                }
            }
        }

        Ok(())
    }

    /// All `2 * size` band loops, horizontal first.
    #[must_use]
    pub fn bands(&self) -> Vec<Band> {
        let last = self.size - 1;
        let mut bands = Vec::with_capacity(2 * self.size);

        for row in 0..self.size {
            let cells = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .flat_map(|face| (0..self.size).map(move |col| (face, col)))
                .map(|(face, col)| self.cell(face, row, col))
                .collect();
            bands.push(Band { axis: BandAxis::Horizontal, index: row, cells });
        }

        for col in 0..self.size {
            let mut cells = Vec::with_capacity(4 * self.size);
            cells.extend((0..self.size).rev().map(|row| self.cell(Face::Front, row, col)));
            cells.extend((0..self.size).rev().map(|row| self.cell(Face::Top, row, col)));
            cells.extend((0..self.size).map(|row| self.cell(Face::Back, row, last - col)));
            cells.extend((0..self.size).rev().map(|row| self.cell(Face::Bottom, row, col)));
            bands.push(Band { axis: BandAxis::Vertical, index: col, cells });
        }

        bands
    }
}

impl Topology for CubeTopology {
    type Cell = CubeCell;

    fn size(&self) -> usize {
        self.size
    }

    fn cells(&self) -> Vec<CubeCell> {
        Face::ALL
            .into_iter()
            .flat_map(|face| (0..self.cells_per_face()).map(move |index| CubeCell::new(face, index)))
            .collect()
    }

    fn step(&self, cell: CubeCell, heading: Heading) -> Option<(CubeCell, Heading)> {
        let (row, col) = self.coords(cell);

        let (next, heading) = match self.offset_in_face(row, col, heading) {
            (Some(r), Some(c)) => return Some((self.cell(cell.face, r, c), heading)),
            (None, None) => return None,
            (None, Some(c)) => {
                let edge = if heading.dr < 0 { Direction::Up } else { Direction::Down };
                self.cross(cell.face, row, c, edge, heading)
            }
            (Some(r), None) => {
                let edge = if heading.dc < 0 { Direction::Left } else { Direction::Right };
                self.cross(cell.face, r, col, edge, heading)
            }
        };

        if !cell.face.is_adjacent(next.face) {
            debug_assert!(false, "seam from {} reached non-adjacent {}", cell.face, next.face);
            error!(from = %cell, to = %next, "seam crossing reached a non-adjacent face");
            return None;
        }

        Some((next, heading))
    }
}
