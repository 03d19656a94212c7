//! LRU Policy Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::slot_list::{Chain, SlotArena, SlotId};
use super::{EvictionAlgorithm, EvictionPolicy};

// == LRU Policy ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are threaded through an arena-backed list where:
/// - Head = Least recently used (next victim)
/// - Tail = Most recently used
///
/// The index maps each key to its slot, so touches and removals never scan.
pub struct LruPolicy<K> {
    /// Slot of each tracked key
    index: HashMap<K, SlotId>,
    /// Nodes of the recency list
    arena: SlotArena<K>,
    /// Recency order, oldest first
    order: Chain,
}

impl<K> LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LRU policy.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            arena: SlotArena::new(),
            order: Chain::new(),
        }
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    // == Touch ==
    fn record_access(&mut self, key: &K) {
        if let Some(&id) = self.index.get(key) {
            self.arena.move_to_back(&mut self.order, id);
        }
    }

    fn record_insert(&mut self, key: K) {
        if self.index.contains_key(&key) {
            self.record_access(&key);
            return;
        }
        let id = self.arena.alloc(key.clone());
        self.arena.push_back(&mut self.order, id);
        self.index.insert(key, id);
    }

    fn record_removal(&mut self, key: &K) {
        if let Some(id) = self.index.remove(key) {
            self.arena.unlink(&mut self.order, id);
            self.arena.release(id);
        }
    }

    // == Peek Oldest ==
    fn select_victim(&self) -> Option<&K> {
        self.order.head().and_then(|id| self.arena.key(id))
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn algorithm(&self) -> EvictionAlgorithm {
        EvictionAlgorithm::Lru
    }
}

impl<K: fmt::Debug> fmt::Debug for LruPolicy<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruPolicy")
            .field("len", &self.order.len())
            .field("slots", &self.arena.len())
            .finish()
    }
}
