//! Search statistics.
//!
//! Stack-allocated counters for one search run.

use std::time::{Duration, Instant};

/// Search-level statistics.
///
/// # Example
///
/// ```
/// use giftdraw_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_backtrack();
///
/// assert_eq!(stats.nodes_visited, 2);
/// assert_eq!(stats.backtracks, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Decision points entered, including the final complete one.
    pub nodes_visited: u64,
    /// Tentative claims undone after a dead end.
    pub backtracks: u64,
    /// Candidates skipped because of self-assignment or a restriction.
    pub candidates_pruned: u64,
}

impl SearchStats {
    /// Resets the counters and marks the start of a search.
    pub fn start(&mut self) {
        *self = Self {
            start_time: Some(Instant::now()),
            ..Self::default()
        };
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    pub fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_pruned(&mut self) {
        self.candidates_pruned += 1;
    }
}
