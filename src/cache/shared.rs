//! Shared Cache Module
//!
//! Thread-safe handle to a [`BoundedCache`]. One mutex guards the entry map
//! and the policy together, and is held only for the duration of a single
//! in-memory operation.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{BoundedCache, CacheStats, EvictionAlgorithm};
use crate::error::ConfigError;

/// Outcome of [`SharedCache::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// The cached value
    Hit(V),
    /// Nothing cached; fill with [`SharedCache::put_if_generation`] at this
    /// generation.
    Miss { generation: u64 },
}

// == Shared Cache ==
/// Cloneable, thread-safe cache handle.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<BoundedCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> fmt::Debug for SharedCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache").field("inner", &self.inner).finish()
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty shared cache.
    pub fn new(capacity: usize, algorithm: EvictionAlgorithm) -> Result<Self, ConfigError> {
        BoundedCache::new(capacity, algorithm).map(Self::from)
    }
}

impl<K, V> From<BoundedCache<K, V>> for SharedCache<K, V> {
    fn from(cache: BoundedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns a clone of the cached value, recording the access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Looks a key up and, on a miss, reports the generation observed under
    /// the same lock.
    pub fn lookup(&self, key: &K) -> Lookup<V>
    where
        V: Clone,
    {
        let mut cache = self.lock();
        match cache.get(key) {
            Some(value) => Lookup::Hit(value.clone()),
            None => Lookup::Miss {
                generation: cache.generation(),
            },
        }
    }

    /// Stores a value; see [`BoundedCache::put`].
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.lock().put(key, value)
    }

    /// Removes a value; absent keys are a no-op.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.lock().remove(key)
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    /// See [`BoundedCache::invalidate`].
    pub fn invalidate(&self, key: &K) -> Option<V> {
        self.lock().invalidate(key)
    }

    /// See [`BoundedCache::put_if_generation`].
    pub fn put_if_generation(&self, key: K, value: V, generation: u64) -> bool {
        self.lock().put_if_generation(key, value, generation)
    }

    /// See [`BoundedCache::put_or_invalidate`].
    pub fn put_or_invalidate(&self, key: K, value: V, generation: u64) -> bool {
        self.lock().put_or_invalidate(key, value, generation)
    }

    /// Changes capacity under the same lock as every other operation.
    pub fn set_capacity(&self, capacity: usize) -> Result<usize, ConfigError> {
        self.lock().set_capacity(capacity)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn algorithm(&self) -> EvictionAlgorithm {
        self.lock().algorithm()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with<R>(&self, f: impl FnOnce(&mut BoundedCache<K, V>) -> R) -> R {
        f(&mut *self.lock())
    }

    // No operation panics midway, so a poisoned lock still guards a consistent cache.
    fn lock(&self) -> MutexGuard<'_, BoundedCache<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let cache: SharedCache<u64, String> = SharedCache::new(10, EvictionAlgorithm::Lru).unwrap();
        let other = cache.clone();

        cache.put(1, "a".to_string());

        assert_eq!(other.get(&1), Some("a".to_string()));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_invalid_capacity_builds_nothing() {
        let result = SharedCache::<u64, String>::new(0, EvictionAlgorithm::Lfu);
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        for algorithm in [EvictionAlgorithm::Lru, EvictionAlgorithm::Lfu] {
            let cache: SharedCache<u64, u64> = SharedCache::new(16, algorithm).unwrap();

            let handles: Vec<_> = (0..8u64)
                .map(|worker| {
                    let cache = cache.clone();
                    thread::spawn(move || {
                        for i in 0..500u64 {
                            let key = (worker * 31 + i) % 64;
                            if cache.get(&key).is_none() {
                                cache.put(key, i);
                            }
                            if i % 7 == 0 {
                                cache.remove(&((key + 1) % 64));
                            }
                            assert!(cache.len() <= 16);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            assert!(cache.len() <= 16);
            assert!(cache.with(|inner| inner.is_consistent()));
        }
    }

    #[test]
    fn test_lookup_reports_generation_on_miss() {
        let cache: SharedCache<u64, u64> = SharedCache::new(4, EvictionAlgorithm::Lru).unwrap();
        cache.put(1, 10);
        cache.invalidate(&7);

        assert_eq!(cache.lookup(&1), Lookup::Hit(10));
        assert_eq!(cache.lookup(&2), Lookup::Miss { generation: 1 });
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_concurrent_invalidation_blocks_stale_fills() {
        let cache: SharedCache<u64, u64> = SharedCache::new(64, EvictionAlgorithm::Lfu).unwrap();

        let handles: Vec<_> = (0..4u64)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..500u64 {
                        let key = (worker + i) % 8;
                        if worker % 2 == 0 {
                            cache.invalidate(&key);
                        } else if let Lookup::Miss { generation } = cache.lookup(&key) {
                            cache.put_if_generation(key, i, generation);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats();
        assert_eq!(cache.generation(), 1000);
        assert!(stats.total_entries <= 8);
        assert!(cache.with(|inner| inner.is_consistent()));
    }

    #[test]
    fn test_set_capacity_through_handle() {
        let cache: SharedCache<u64, u64> = SharedCache::new(4, EvictionAlgorithm::Lfu).unwrap();
        for key in 0..4 {
            cache.put(key, key);
        }

        assert_eq!(cache.set_capacity(1), Ok(3));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 1);
    }
}
