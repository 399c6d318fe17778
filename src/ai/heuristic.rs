//! Potential-line scoring.
//!
//! A candidate cell is scored by every K-cell window through it. A window
//! free of the other side's marks is still winnable for us and adds
//! `2^own`; a window free of our marks is still winnable for them and adds
//! `2^theirs`. Windows holding both sides' marks are dead and add nothing.

use crate::core::{Mark, Side};
use crate::rules::Surface;
use crate::topology::Topology;

/// Potential score of `cell` for `side`.
#[must_use]
pub fn potential<S: Surface>(surface: &S, cell: S::Cell, side: Side, win_length: usize) -> u64 {
    let own_mark = side.mark();
    let their_mark = side.other().mark();

    surface
        .topology()
        .windows_through(cell, win_length)
        .iter()
        .map(|window| {
            let marks = window.iter().map(|&c| surface.get(c).unwrap_or(Mark::Empty));
            let (own, theirs) = marks.fold((0u32, 0u32), |(own, theirs), m| {
                (own + u32::from(m == own_mark), theirs + u32::from(m == their_mark))
            });

            let mut score = 0u64;
            if theirs == 0 {
                score += 1u64 << own;
            }
            if own == 0 {
                score += 1u64 << theirs;
            }
            score
        })
        .sum()
}

/// Highest potential among empty cells and every cell achieving it, in
/// scan order. `None` on a full surface.
#[must_use]
pub fn best_scored<S: Surface>(surface: &S, side: Side, win_length: usize) -> Option<(u64, Vec<S::Cell>)> {
    let mut best: Option<(u64, Vec<S::Cell>)> = None;

    for cell in surface.empty_cells() {
        let score = potential(surface, cell, side, win_length);
        match best.as_mut() {
            Some((top, cells)) if score == *top => {
                cells.push(cell);
                continue;
            }
            Some((top, _)) if score < *top => continue,
            _ => {}
        }
        best = Some((score, vec![cell]));
    }

    best
}
