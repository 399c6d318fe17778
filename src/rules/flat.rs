//! Flat-grid win detection.
//!
//! Headings are scanned in order: rows, columns, down-right, down-left.
//! Within a heading, start cells go in row-major order and the first
//! complete window wins, so the reported line always begins at its start
//! cell.

use super::{GameResult, Surface};
use crate::board::{Board, CellRef};
use crate::core::{Mark, Side};
use crate::topology::{FlatTopology, Heading, Line, Topology};

/// Winner, tie, or `None` if the game continues.
#[must_use]
pub fn detect_flat(board: &Board, win_length: usize) -> Option<GameResult<usize>> {
    if let Some((side, line)) = find_line(board, win_length) {
        return Some(GameResult::Winner { side, line });
    }
    board.is_full().then_some(GameResult::Tie)
}

/// First window of `win_length` identical marks.
fn find_line(board: &Board, win_length: usize) -> Option<(Side, Line<usize>)> {
    if win_length == 0 || win_length > board.size() {
        return None;
    }

    let topo = board.topology();
    for heading in Heading::LINES {
        for start in topo.cells() {
            let Some(side) = board.get(start).and_then(Mark::side) else {
                continue;
            };
            let rest = topo.ray_while(start, heading, win_length - 1, |c| board.get(c) == Some(side.mark()));
            if rest.len() == win_length - 1 {
                let mut line = Line::new();
                line.push(start);
                line.extend(rest);
                return Some((side, line));
            }
        }
    }

    None
}

impl Surface for Board {
    type Cell = usize;
    type Topology = FlatTopology;

    fn topology(&self) -> FlatTopology {
        Board::topology(self)
    }

    fn get(&self, cell: usize) -> Option<Mark> {
        Board::get(self, cell)
    }

    fn set(&mut self, cell: usize, mark: Mark) {
        Board::set(self, cell, mark);
    }

    fn empty_cells(&self) -> Vec<usize> {
        Board::empty_cells(self)
    }

    fn is_full(&self) -> bool {
        Board::is_full(self)
    }

    fn detect(&self, win_length: usize) -> Option<GameResult<usize>> {
        detect_flat(self, win_length)
    }

    fn cell_ref(cell: usize) -> CellRef {
        CellRef::Flat(cell)
    }

    fn center(&self) -> Option<usize> {
        (self.size() == 3).then_some(4)
    }
}
