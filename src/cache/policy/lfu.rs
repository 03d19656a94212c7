//! LFU Policy Module
//!
//! Implements Least Frequently Used tracking for cache eviction.
//!
//! Keys are grouped into frequency buckets. Each bucket is a recency list
//! (oldest first) threaded through a shared arena, and buckets are linked to
//! their nearest lower/higher neighbours so the minimum frequency can be
//! advanced without scanning.
//!
//! ```text
//!   min_freq = 1
//!   freq 1: [d, e]      <- victim is d (oldest at lowest frequency)
//!   freq 3: [b]
//!   freq 7: [a, c]
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::slot_list::{Chain, SlotArena, SlotId};
use super::{EvictionAlgorithm, EvictionPolicy};

#[derive(Debug, Clone, Copy)]
struct Slot {
    id: SlotId,
    freq: u64,
}

#[derive(Debug, Default)]
struct Bucket {
    chain: Chain,
    lower: Option<u64>,
    higher: Option<u64>,
}

// == LFU Policy ==
/// Tracks access frequency for LFU eviction strategy.
pub struct LfuPolicy<K> {
    /// Slot and frequency of each tracked key
    index: HashMap<K, Slot>,
    /// Nodes of every bucket list
    arena: SlotArena<K>,
    /// Non-empty buckets by frequency
    buckets: HashMap<u64, Bucket>,
    /// Lowest frequency present, 0 when empty
    min_freq: u64,
}

impl<K> LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LFU policy.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            arena: SlotArena::new(),
            buckets: HashMap::new(),
            min_freq: 0,
        }
    }

    /// Access count of a tracked key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.index.get(key).map(|slot| slot.freq)
    }

    /// Lowest frequency currently tracked.
    pub fn min_frequency(&self) -> Option<u64> {
        (self.min_freq != 0).then_some(self.min_freq)
    }

    // == Bucket Links ==
    fn insert_bucket(&mut self, freq: u64, lower: Option<u64>, higher: Option<u64>) {
        if let Some(bucket) = lower.and_then(|f| self.buckets.get_mut(&f)) {
            bucket.higher = Some(freq);
        }
        if let Some(bucket) = higher.and_then(|f| self.buckets.get_mut(&f)) {
            bucket.lower = Some(freq);
        }
        self.buckets.insert(
            freq,
            Bucket {
                chain: Chain::new(),
                lower,
                higher,
            },
        );
    }

    /// Drops an empty bucket and returns its `(lower, higher)` neighbours.
    fn remove_bucket(&mut self, freq: u64) -> (Option<u64>, Option<u64>) {
        let Some(bucket) = self.buckets.remove(&freq) else {
            return (None, None);
        };
        debug_assert!(bucket.chain.is_empty());
        if let Some(lower) = bucket.lower.and_then(|f| self.buckets.get_mut(&f)) {
            lower.higher = bucket.higher;
        }
        if let Some(higher) = bucket.higher.and_then(|f| self.buckets.get_mut(&f)) {
            higher.lower = bucket.lower;
        }
        (bucket.lower, bucket.higher)
    }

    /// Unlinks `id` from the `freq` bucket, dropping the bucket if it empties.
    ///
    /// Returns the neighbours of the bucket when it was dropped.
    fn detach(&mut self, freq: u64, id: SlotId) -> Option<(Option<u64>, Option<u64>)> {
        let bucket = self.buckets.get_mut(&freq)?;
        self.arena.unlink(&mut bucket.chain, id);
        if bucket.chain.is_empty() {
            Some(self.remove_bucket(freq))
        } else {
            None
        }
    }

    fn attach(&mut self, freq: u64, id: SlotId) {
        if let Some(bucket) = self.buckets.get_mut(&freq) {
            self.arena.push_back(&mut bucket.chain, id);
        }
    }
}

impl<K> Default for LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn record_access(&mut self, key: &K) {
        let Some(slot) = self.index.get(key).copied() else {
            return;
        };

        if slot.freq == u64::MAX {
            // Saturated: refresh recency within the top bucket only
            if let Some(bucket) = self.buckets.get_mut(&slot.freq) {
                self.arena.move_to_back(&mut bucket.chain, slot.id);
            }
            return;
        }

        let next_freq = slot.freq + 1;
        let (lower, higher) = match self.buckets.get(&slot.freq) {
            Some(bucket) => (bucket.lower, bucket.higher),
            None => return,
        };

        let emptied = self.detach(slot.freq, slot.id).is_some();
        if !self.buckets.contains_key(&next_freq) {
            let below = if emptied { lower } else { Some(slot.freq) };
            self.insert_bucket(next_freq, below, higher);
        }
        self.attach(next_freq, slot.id);

        if emptied && self.min_freq == slot.freq {
            self.min_freq = next_freq;
        }
        if let Some(entry) = self.index.get_mut(key) {
            entry.freq = next_freq;
        }
    }

    fn record_insert(&mut self, key: K) {
        if self.index.contains_key(&key) {
            self.record_access(&key);
            return;
        }

        let id = self.arena.alloc(key.clone());
        if !self.buckets.contains_key(&1) {
            let higher = (self.min_freq != 0).then_some(self.min_freq);
            self.insert_bucket(1, None, higher);
        }
        self.attach(1, id);
        self.min_freq = 1;
        self.index.insert(key, Slot { id, freq: 1 });
    }

    fn record_removal(&mut self, key: &K) {
        let Some(slot) = self.index.remove(key) else {
            return;
        };

        if let Some((_, higher)) = self.detach(slot.freq, slot.id) {
            if self.min_freq == slot.freq {
                self.min_freq = higher.unwrap_or(0);
            }
        }
        self.arena.release(slot.id);
    }

    fn select_victim(&self) -> Option<&K> {
        let bucket = self.buckets.get(&self.min_freq)?;
        bucket.chain.head().and_then(|id| self.arena.key(id))
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn algorithm(&self) -> EvictionAlgorithm {
        EvictionAlgorithm::Lfu
    }
}

impl<K: fmt::Debug> fmt::Debug for LfuPolicy<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuPolicy")
            .field("len", &self.index.len())
            .field("buckets", &self.buckets.len())
            .field("min_freq", &self.min_freq)
            .finish()
    }
}
