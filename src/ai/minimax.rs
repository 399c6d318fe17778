//! Exhaustive minimax with alpha-beta pruning.
//!
//! Scores are from the searching side's point of view, with depth counted
//! in plies from the root:
//!
//! - searching side wins: `win_score - depth` (faster is better)
//! - other side wins: `depth - win_score` (slower is better)
//! - tie, or depth limit reached: `0`
//!
//! Each root candidate is searched with a full window so its value is
//! exact, and the first candidate in scan order wins ties. The board is
//! mutated in place and restored after every probe.

use std::time::Instant;

use tracing::debug;

use super::config::SearchConfig;
use super::stats::SearchStats;
use crate::core::{Mark, Side};
use crate::rules::Surface;

/// Best root move and its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<C> {
    /// Chosen cell; `None` if the surface had no empty cell.
    pub cell: Option<C>,
    /// Minimax value of the chosen cell.
    pub score: i32,
    /// Search statistics.
    pub stats: SearchStats,
}

/// Search state threaded through the recursion.
pub struct Minimax<'a> {
    config: &'a SearchConfig,
    side: Side,
    win_length: usize,
    stats: SearchStats,
}

impl<'a> Minimax<'a> {
    /// Search on behalf of `side`, who is on turn.
    #[must_use]
    pub fn new(config: &'a SearchConfig, side: Side, win_length: usize) -> Self {
        Self {
            config,
            side,
            win_length,
            stats: SearchStats::new(),
        }
    }

    /// Pick the best move for the side on turn.
    pub fn search<S: Surface>(mut self, surface: &S) -> SearchResult<S::Cell> {
        let start = Instant::now();
        let mut board = surface.clone();

        let mut best_cell = None;
        let mut best_score = i32::MIN;

        for cell in board.empty_cells() {
            board.set(cell, self.side.mark());
            let score = self.value(&mut board, 1, false, i32::MIN, i32::MAX);
            board.set(cell, Mark::Empty);

            if score > best_score {
                best_score = score;
                best_cell = Some(cell);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            max_depth = self.stats.max_depth,
            score = best_score,
            "minimax search complete"
        );

        SearchResult {
            cell: best_cell,
            score: if best_cell.is_some() { best_score } else { 0 },
            stats: self.stats,
        }
    }

    /// Value of `board` with `depth` plies played since the root.
    ///
    /// `maximizing` is true when the searching side is on turn. A branch is
    /// abandoned once `alpha >= beta`.
    pub fn value<S: Surface>(&mut self, board: &mut S, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.visit(depth);

        if let Some(result) = board.detect(self.win_length) {
            let win = self.config.win_score - depth as i32;
            return match result.winner() {
                Some(side) if side == self.side => win,
                Some(_) => -win,
                None => 0,
            };
        }
        if depth >= self.config.max_depth {
            return 0;
        }

        let mover = if maximizing { self.side } else { self.side.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut searched = false;

        for cell in board.empty_cells() {
            board.set(cell, mover.mark());
            let score = self.value(board, depth + 1, !maximizing, alpha, beta);
            board.set(cell, Mark::Empty);
            searched = true;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if searched {
            best
        } else {
            0
        }
    }
}

/// Run a full search for `side` with the given configuration.
#[must_use]
pub fn best_move<S: Surface>(surface: &S, side: Side, win_length: usize, config: &SearchConfig) -> SearchResult<S::Cell> {
    Minimax::new(config, side, win_length).search(surface)
}
