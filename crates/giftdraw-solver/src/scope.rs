//! Search-level scope.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::stats::SearchStats;

/// Call-local state of one or more searches: the RNG and the counters.
///
/// Nothing here is shared between calls, so independent scopes can run on
/// separate threads without coordination.
pub struct SearchScope {
    rng: StdRng,
    stats: SearchStats,
}

impl SearchScope {
    /// Creates a scope seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            stats: SearchStats::default(),
        }
    }

    /// Creates a scope with a fixed seed, for reproducible shuffles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    /// Creates a seeded scope when `seed` is given, an entropy-seeded one otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn start_search(&mut self) {
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScope")
            .field("stats", &self.stats)
            .finish()
    }
}
