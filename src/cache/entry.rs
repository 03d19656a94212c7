//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access metadata.

// == Cache Entry ==
/// Represents a single cache entry with value and access metadata.
///
/// Owned by the cache that holds it; the eviction policy only ever sees keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The key the entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Cache clock at the last insert, overwrite or read
    pub recency_stamp: u64,
    /// Number of inserts, overwrites and reads since the entry was created
    pub frequency: u64,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new entry stamped at `stamp` with frequency 1.
    pub fn new(key: K, value: V, stamp: u64) -> Self {
        Self {
            key,
            value,
            recency_stamp: stamp,
            frequency: 1,
        }
    }

    // == Touch ==
    /// Records a read at `stamp`.
    pub fn touch(&mut self, stamp: u64) {
        self.recency_stamp = stamp;
        self.frequency = self.frequency.saturating_add(1);
    }

    // == Replace ==
    /// Overwrites the value in place, counting as an access.
    ///
    /// Returns the previous value.
    pub fn replace(&mut self, value: V, stamp: u64) -> V {
        self.touch(stamp);
        std::mem::replace(&mut self.value, value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(1u64, "a".to_string(), 7);

        assert_eq!(entry.key, 1);
        assert_eq!(entry.value, "a");
        assert_eq!(entry.recency_stamp, 7);
        assert_eq!(entry.frequency, 1);
    }

    #[test]
    fn test_entry_touch() {
        let mut entry = CacheEntry::new(1u64, "a", 1);

        entry.touch(5);
        entry.touch(9);

        assert_eq!(entry.recency_stamp, 9);
        assert_eq!(entry.frequency, 3);
    }

    #[test]
    fn test_entry_replace() {
        let mut entry = CacheEntry::new(1u64, "old", 1);

        let previous = entry.replace("new", 2);

        assert_eq!(previous, "old");
        assert_eq!(entry.value, "new");
        assert_eq!(entry.recency_stamp, 2);
        assert_eq!(entry.frequency, 2);
    }

    #[test]
    fn test_entry_frequency_saturates() {
        let mut entry = CacheEntry::new(1u64, (), 1);
        entry.frequency = u64::MAX;

        entry.touch(2);

        assert_eq!(entry.frequency, u64::MAX);
    }
}
