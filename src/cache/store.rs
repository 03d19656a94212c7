//! Bounded Cache Module
//!
//! Fixed-capacity key/value map that delegates victim selection to a
//! pluggable eviction policy.
//!
//! The cache also carries an invalidation generation. Callers that load a
//! value outside the lock record the generation first and fill with
//! [`BoundedCache::put_if_generation`], so a value read before a concurrent
//! invalidation is never stored.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cache::{CacheEntry, CacheStats, EvictionAlgorithm, EvictionPolicy};
use crate::error::ConfigError;

// == Bounded Cache ==
/// Fixed-capacity cache with LRU or LFU eviction.
///
/// `entries.len() <= capacity` holds after every public operation, and the
/// policy tracks exactly the keys present in `entries`.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<K, V>>,
    /// Victim selection
    policy: Box<dyn EvictionPolicy<K>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Logical clock for recency stamps
    clock: u64,
    /// Bumped by every invalidation
    generation: u64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`ConfigError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, algorithm: EvictionAlgorithm) -> Result<Self, ConfigError> {
        Self::with_policy(capacity, algorithm.new_policy())
    }

    /// Creates an empty cache around an existing, empty policy.
    pub fn with_policy(
        capacity: usize,
        policy: Box<dyn EvictionPolicy<K>>,
    ) -> Result<Self, ConfigError> {
        validate_capacity(capacity)?;
        debug_assert!(policy.is_empty());
        Ok(Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            policy,
            stats: CacheStats::new(),
            capacity,
            clock: 0,
            generation: 0,
        })
    }
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Get ==
    /// Retrieves a value by key, recording the access with the policy.
    ///
    /// Absence is a normal outcome and is reported as `None`.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let stamp = self.tick();
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.touch(stamp);
                self.policy.record_access(key);
                self.stats.record_hit();
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a value, evicting the policy's victim if a new key would
    /// exceed capacity.
    ///
    /// Returns the previous value when the key was already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let stamp = self.tick();

        if let Some(entry) = self.entries.get_mut(&key) {
            let previous = entry.replace(value, stamp);
            self.policy.record_access(&key);
            return Some(previous);
        }

        if self.entries.len() >= self.capacity {
            let evicted = self.evict_one();
            debug_assert!(evicted.is_some(), "full cache with an empty policy");
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(key.clone(), value, stamp));
        self.policy.record_insert(key);
        self.stats.set_total_entries(self.entries.len());
        None
    }

    // == Remove ==
    /// Removes an entry by key. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.policy.record_removal(key);
        self.stats.record_removal();
        self.stats.set_total_entries(self.entries.len());
        Some(entry.value)
    }

    // == Invalidation ==
    /// Current invalidation generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Removes `key` and bumps the generation, so fills loaded before this
    /// call are dropped.
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.generation += 1;
        self.remove(key)
    }

    /// Stores a value loaded after `generation` was observed, unless an
    /// invalidation happened since.
    ///
    /// Returns whether the value was stored.
    pub fn put_if_generation(&mut self, key: K, value: V, generation: u64) -> bool {
        if self.generation != generation {
            self.stats.record_stale_fill();
            return false;
        }
        self.put(key, value);
        true
    }

    /// Stores the result of a write observed at `generation` and bumps the
    /// generation.
    ///
    /// When another invalidation happened since, the cached order of writes
    /// is unknown and the key is invalidated instead. Returns whether the
    /// value was stored.
    pub fn put_or_invalidate(&mut self, key: K, value: V, generation: u64) -> bool {
        if self.generation != generation {
            self.invalidate(&key);
            return false;
        }
        self.generation += 1;
        self.put(key, value);
        true
    }

    // == Set Capacity ==
    /// Changes the capacity, evicting until the cache fits.
    ///
    /// Returns the number of entries evicted.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<usize, ConfigError> {
        validate_capacity(capacity)?;
        self.capacity = capacity;

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            if self.evict_one().is_none() {
                break;
            }
            evicted += 1;
        }
        Ok(evicted)
    }

    // == Peek ==
    /// Returns an entry without recording an access.
    pub fn peek(&self, key: &K) -> Option<&CacheEntry<K, V>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn algorithm(&self) -> EvictionAlgorithm {
        self.policy.algorithm()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Checks that the map and the policy agree and capacity holds.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.len() <= self.capacity
            && self.policy.len() == self.entries.len()
            && self
                .policy
                .select_victim()
                .map_or(self.entries.is_empty(), |victim| self.entries.contains_key(victim))
    }

    // == Evict ==
    /// Removes the policy's victim from both the map and the policy.
    fn evict_one(&mut self) -> Option<K> {
        let victim = self.policy.select_victim()?.clone();
        self.entries.remove(&victim);
        self.policy.record_removal(&victim);
        self.stats.record_eviction();
        self.stats.set_total_entries(self.entries.len());
        Some(victim)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

fn validate_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::InvalidCapacity(capacity.to_string()));
    }
    Ok(())
}
