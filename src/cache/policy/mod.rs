//! Eviction Policy Module
//!
//! Decides which key to sacrifice when a bounded cache is full. Policies only
//! track keys; values always live in the cache.

mod lfu;
mod lru;
mod slot_list;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

// == Eviction Policy ==
/// Bookkeeping strategy consulted by the cache on every access.
///
/// All operations run in O(1) amortized time. The owning cache guarantees
/// that `record_access` and `record_removal` are only called for tracked
/// keys and `record_insert` only for untracked ones; implementations still
/// treat violations as no-ops rather than corrupting their state.
pub trait EvictionPolicy<K>: fmt::Debug + Send {
    /// A tracked key was read or overwritten.
    fn record_access(&mut self, key: &K);

    /// A new key entered the cache.
    fn record_insert(&mut self, key: K);

    /// A key left the cache, by explicit removal or eviction.
    fn record_removal(&mut self, key: &K);

    /// Key that should be evicted next, or `None` when nothing is tracked.
    fn select_victim(&self) -> Option<&K>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The algorithm this policy implements.
    fn algorithm(&self) -> EvictionAlgorithm;
}

// == Eviction Algorithm ==
/// Eviction algorithms selectable by configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionAlgorithm {
    /// Least recently used
    Lru,
    /// Least frequently used, ties broken by recency
    Lfu,
}

impl EvictionAlgorithm {
    /// Configuration name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionAlgorithm::Lru => "lru",
            EvictionAlgorithm::Lfu => "lfu",
        }
    }

    /// Builds an empty policy implementing this algorithm.
    pub fn new_policy<K>(self) -> Box<dyn EvictionPolicy<K>>
    where
        K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    {
        match self {
            EvictionAlgorithm::Lru => Box::new(LruPolicy::new()),
            EvictionAlgorithm::Lfu => Box::new(LfuPolicy::new()),
        }
    }
}

impl FromStr for EvictionAlgorithm {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("lru") {
            Ok(EvictionAlgorithm::Lru)
        } else if trimmed.eq_ignore_ascii_case("lfu") {
            Ok(EvictionAlgorithm::Lfu)
        } else {
            Err(ConfigError::UnknownAlgorithm(name.to_string()))
        }
    }
}

impl fmt::Display for EvictionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
