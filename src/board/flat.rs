//! Flat N×N board.

use serde::{Deserialize, Serialize};

use crate::core::{Error, IllegalMove, Mark, Result, Side};
use crate::topology::FlatTopology;

/// Row-major grid of marks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Board from row-major marks.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != size * size`.
    #[must_use]
    pub fn from_marks(size: usize, cells: Vec<Mark>) -> Self {
        assert_eq!(cells.len(), size * size, "board needs {} cells", size * size);
        Self { size, cells }
    }

    /// Parse a board from symbols (`X`, `O`, `.`), ignoring whitespace.
    ///
    /// The size is inferred from the number of symbols, which must be a
    /// perfect square.
    pub fn parse(text: &str) -> Result<Self> {
        let cells = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Mark::from_symbol(c).ok_or_else(|| Error::InvalidParameters(format!("bad symbol '{}'", c))))
            .collect::<Result<Vec<_>>>()?;

        let size = (0..=cells.len()).find(|n| n * n >= cells.len()).unwrap_or(0);
        if size * size != cells.len() || size == 0 {
            return Err(Error::InvalidParameters(format!(
                "{} cells do not form a square board",
                cells.len()
            )));
        }

        Ok(Self { size, cells })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn topology(&self) -> FlatTopology {
        FlatTopology::new(self.size)
    }

    /// All marks in row-major order.
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.cells
    }

    /// Mark at `index`, `None` if off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is off the board.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Place a side's mark on an empty cell.
    pub fn place(&mut self, index: usize, side: Side) -> std::result::Result<(), IllegalMove> {
        match self.get(index) {
            None => Err(IllegalMove::OutOfRange(index.into())),
            Some(Mark::Empty) => {
                self.cells[index] = side.mark();
                Ok(())
            }
            Some(_) => Err(IllegalMove::Occupied(index.into())),
        }
    }

    /// Number of marks a side has placed.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&m| m == side.mark()).count()
    }

    /// Check if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Check if no cell is marked.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Empty cell indices in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|m| m.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
