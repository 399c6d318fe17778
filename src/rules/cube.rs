//! Cube win detection.
//!
//! Two mechanisms, both checked on every call, bands first:
//!
//! - **Bands**: each closed loop around the cube is scanned circularly for
//!   a window of exactly K identical marks.
//! - **Lines**: from every marked cell, along each of the four line
//!   headings, the run of identical marks is walked both ways with heading
//!   changes at face seams. A run of at least K wins with its first K cells.

use super::band::circular_window;
use super::{GameResult, Surface};
use crate::board::{CellRef, CubeBoard};
use crate::core::{Mark, Side};
use crate::topology::{CubeCell, CubeTopology, Heading, Line, Topology};

/// Winner, tie, or `None` if the game continues.
#[must_use]
pub fn detect_cube(board: &CubeBoard, win_length: usize) -> Option<GameResult<CubeCell>> {
    if let Some((side, line)) = band_win(board, win_length).or_else(|| line_win(board, win_length)) {
        return Some(GameResult::Winner { side, line });
    }
    board.is_full().then_some(GameResult::Tie)
}

/// First band holding a circular window of `win_length` identical marks.
#[must_use]
pub fn band_win(board: &CubeBoard, win_length: usize) -> Option<(Side, Line<CubeCell>)> {
    board
        .topology()
        .bands()
        .iter()
        .find_map(|band| circular_window(&band.cells, win_length, |c| board.get(c).unwrap_or_default()))
}

/// First run of at least `win_length` identical marks along a line.
#[must_use]
pub fn line_win(board: &CubeBoard, win_length: usize) -> Option<(Side, Line<CubeCell>)> {
    if win_length == 0 {
        return None;
    }

    let topo = board.topology();
    for cell in topo.cells() {
        let Some(side) = board.get(cell).and_then(Mark::side) else {
            continue;
        };
        for heading in Heading::LINES {
            if let Some(line) = run_through(board, topo, cell, heading, side, win_length) {
                return Some((side, line));
            }
        }
    }

    None
}

/// The first `win_length` cells of the run through `cell`, if long enough.
fn run_through(
    board: &CubeBoard,
    topo: CubeTopology,
    cell: CubeCell,
    heading: Heading,
    side: Side,
    win_length: usize,
) -> Option<Line<CubeCell>> {
    let owned = |c: CubeCell| board.get(c) == Some(side.mark());

    let back = topo.ray_while(cell, heading.reversed(), win_length - 1, owned);
    let forward = topo.ray_while(cell, heading, win_length - 1, |c| owned(c) && !back.contains(&c));

    if back.len() + 1 + forward.len() < win_length {
        return None;
    }

    Some(
        back.iter()
            .rev()
            .copied()
            .chain(std::iter::once(cell))
            .chain(forward.iter().copied())
            .take(win_length)
            .collect(),
    )
}

impl Surface for CubeBoard {
    type Cell = CubeCell;
    type Topology = CubeTopology;

    fn topology(&self) -> CubeTopology {
        CubeBoard::topology(self)
    }

    fn get(&self, cell: CubeCell) -> Option<Mark> {
        CubeBoard::get(self, cell)
    }

    fn set(&mut self, cell: CubeCell, mark: Mark) {
        CubeBoard::set(self, cell, mark);
    }

    fn empty_cells(&self) -> Vec<CubeCell> {
        CubeBoard::empty_cells(self)
    }

    fn is_full(&self) -> bool {
        CubeBoard::is_full(self)
    }

    fn detect(&self, win_length: usize) -> Option<GameResult<CubeCell>> {
        detect_cube(self, win_length)
    }

    fn cell_ref(cell: CubeCell) -> CellRef {
        CellRef::Cube(cell)
    }

    fn region(&self, cell: CubeCell) -> usize {
        cell.face.index()
    }

    fn region_count(&self) -> usize {
        6
    }
}
