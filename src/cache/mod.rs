//! Cache Module
//!
//! Provides a bounded in-memory cache with pluggable LRU or LFU eviction.

mod entry;
mod factory;
mod policy;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use factory::{build_cache, build_cache_with};
pub use policy::{EvictionAlgorithm, EvictionPolicy, LfuPolicy, LruPolicy};
pub use shared::{Lookup, SharedCache};
pub use stats::CacheStats;
pub use store::BoundedCache;
