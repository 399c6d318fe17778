//! Faces, edge directions and line headings.

use serde::{Deserialize, Serialize};

/// One of the six grids forming the cube surface.
///
/// Each face is read in its own frame: row 0 at the face's top edge,
/// column 0 at its left edge, as seen from outside the cube with `top`
/// viewed from above (front edge at the bottom) and `bottom` viewed from
/// below (front edge at the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// All faces in scan order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Position in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Back => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    /// Check if two faces share an edge.
    ///
    /// Every face touches the four faces that are neither itself nor its
    /// opposite.
    #[must_use]
    pub fn is_adjacent(self, other: Face) -> bool {
        self != other && self.opposite() != other
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Face {
    type Err = crate::core::Error;

    fn from_str(s: &str) -> crate::core::Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Face::ALL
            .into_iter()
            .find(|face| face.name() == lower)
            .ok_or_else(|| crate::core::Error::InvalidParameters(format!("unknown face '{}'", s)))
    }
}

/// Orthogonal step direction, also naming the edge a step leaves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in seam-table order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Position in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step leaving through this edge.
    #[must_use]
    pub const fn outward(self) -> Heading {
        match self {
            Direction::Up => Heading::new(-1, 0),
            Direction::Down => Heading::new(1, 0),
            Direction::Left => Heading::new(0, -1),
            Direction::Right => Heading::new(0, 1),
        }
    }

    /// Unit step running along this edge in the direction its position
    /// counter grows (columns for up/down, rows for left/right).
    #[must_use]
    pub const fn along(self) -> Heading {
        match self {
            Direction::Up | Direction::Down => Heading::new(0, 1),
            Direction::Left | Direction::Right => Heading::new(1, 0),
        }
    }
}

/// A line direction `(dr, dc)` in a face's local frame.
///
/// Components are each -1, 0 or 1 and not both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Heading {
    pub dr: i8,
    pub dc: i8,
}

impl Heading {
    /// Left to right.
    pub const EAST: Heading = Heading::new(0, 1);
    /// Top to bottom.
    pub const SOUTH: Heading = Heading::new(1, 0);
    /// Down-right diagonal.
    pub const SOUTH_EAST: Heading = Heading::new(1, 1);
    /// Down-left diagonal.
    pub const SOUTH_WEST: Heading = Heading::new(1, -1);

    /// The four line orientations scanned for wins.
    pub const LINES: [Heading; 4] = [
        Heading::EAST,
        Heading::SOUTH,
        Heading::SOUTH_EAST,
        Heading::SOUTH_WEST,
    ];

    #[must_use]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// The same line walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(-self.dr, -self.dc)
    }

    /// Dot product.
    #[must_use]
    pub const fn dot(self, other: Heading) -> i8 {
        self.dr * other.dr + self.dc * other.dc
    }

    /// `a * self + b * other`.
    #[must_use]
    pub const fn combine(self, a: i8, other: Heading, b: i8) -> Heading {
        Heading::new(a * self.dr + b * other.dr, a * self.dc + b * other.dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_matches_all() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_face_adjacency() {
        for face in Face::ALL {
            let adjacent = Face::ALL.into_iter().filter(|&f| face.is_adjacent(f)).count();
            assert_eq!(adjacent, 4, "{} should touch four faces", face);
            assert!(!face.is_adjacent(face));
            assert!(!face.is_adjacent(face.opposite()));
            assert_eq!(face.opposite().opposite(), face);
        }
        assert!(!Face::Front.is_adjacent(Face::Back));
        assert!(Face::Front.is_adjacent(Face::Top));
    }

    #[test]
    fn test_face_parse() {
        assert_eq!("Front".parse::<Face>().unwrap(), Face::Front);
        assert_eq!("bottom".parse::<Face>().unwrap(), Face::Bottom);
        assert!("middle".parse::<Face>().is_err());
    }

    #[test]
    fn test_direction_vectors() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.outward().reversed(), dir.opposite().outward());
            assert_eq!(dir.outward().dot(dir.along()), 0);
        }
    }

    #[test]
    fn test_heading_combine() {
        let h = Direction::Up.outward().combine(1, Direction::Up.along(), 1);
        assert_eq!(h, Heading::new(-1, 1));
        assert_eq!(Heading::SOUTH_WEST.reversed(), Heading::new(-1, 1));
    }
}
