//! Cache Factory Module
//!
//! Builds the shared cache from configuration values.

use std::fmt;
use std::hash::Hash;

use tracing::info;

use crate::cache::{EvictionAlgorithm, SharedCache};
use crate::error::ConfigError;

/// Builds a cache from an algorithm name (`lru` / `lfu`) and a capacity.
///
/// An unknown name or a zero capacity fails here, before any request is
/// served.
pub fn build_cache<K, V>(algorithm: &str, capacity: usize) -> Result<SharedCache<K, V>, ConfigError>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    let algorithm: EvictionAlgorithm = algorithm.parse()?;
    build_cache_with(algorithm, capacity)
}

/// Builds a cache for an already parsed algorithm.
pub fn build_cache_with<K, V>(
    algorithm: EvictionAlgorithm,
    capacity: usize,
) -> Result<SharedCache<K, V>, ConfigError>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    let cache = SharedCache::new(capacity, algorithm)?;
    info!("Built {} cache with capacity {}", algorithm, capacity);
    Ok(cache)
}
