//! Circular window scan for band loops.

use crate::core::{Mark, Side};
use crate::topology::Line;

/// First window of exactly `len` consecutive identical marks on a closed
/// loop, allowing the window to wrap from the last cell to the first.
///
/// Windows are tried by start position in loop order.
pub fn circular_window<C, F>(cells: &[C], len: usize, mark_at: F) -> Option<(Side, Line<C>)>
where
    C: Copy,
    F: Fn(C) -> Mark,
{
    let n = cells.len();
    if len == 0 || len > n {
        return None;
    }

    let marks: Vec<Mark> = cells.iter().map(|&c| mark_at(c)).collect();

    (0..n).find_map(|start| {
        let side = marks[start].side()?;
        (1..len)
            .all(|i| marks[(start + i) % n] == side.mark())
            .then(|| (side, (0..len).map(|i| cells[(start + i) % n]).collect()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(text: &str) -> Vec<Mark> {
        text.chars().filter_map(Mark::from_symbol).collect()
    }

    #[test]
    fn test_plain_window() {
        let loop_marks = marks("..XXX...");
        let cells: Vec<usize> = (0..loop_marks.len()).collect();
        let (side, line) = circular_window(&cells, 3, |i| loop_marks[i]).unwrap();
        assert_eq!(side, Side::Player);
        assert_eq!(line.as_slice(), [2, 3, 4]);
    }

    #[test]
    fn test_wrapping_window() {
        let loop_marks = marks("OO....O");
        let cells: Vec<usize> = (0..loop_marks.len()).collect();
        let (side, line) = circular_window(&cells, 3, |i| loop_marks[i]).unwrap();
        assert_eq!(side, Side::Opponent);
        assert_eq!(line.as_slice(), [6, 0, 1]);
    }

    #[test]
    fn test_broken_run() {
        let loop_marks = marks("XX.X.XOO");
        let cells: Vec<usize> = (0..loop_marks.len()).collect();
        assert!(circular_window(&cells, 3, |i| loop_marks[i]).is_none());
    }
}
