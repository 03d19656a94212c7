//! Cache Statistics Module
//!
//! Tracks cache performance metrics. Policy evictions, explicit removals and
//! fills dropped after a concurrent invalidation are counted apart.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of retrievals that found nothing
    pub misses: u64,
    /// Number of entries evicted by the policy (explicit removals excluded)
    pub evictions: u64,
    /// Number of entries dropped by `remove` or an invalidation
    pub removals: u64,
    /// Fills skipped because an invalidation happened while the value was loaded
    pub stale_fills: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub fn record_stale_fill(&mut self) {
        self.stale_fills += 1;
    }

    /// Entries that left the cache for any reason.
    pub fn departures(&self) -> u64 {
        self.evictions + self.removals
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
