//! Response DTOs for the comment API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, EvictionAlgorithm};
use crate::comments::{Comment, CommentId, Page};

/// A comment as returned by every comment endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub news_id: u64,
    /// Creation time (RFC 3339)
    pub time: DateTime<Utc>,
    pub username: String,
    pub text: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            news_id: comment.news_id,
            time: comment.time,
            username: comment.username,
            text: comment.text,
        }
    }
}

/// One page of a listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}

impl<T> PageResponse<T> {
    /// Converts a domain page, mapping each item to its DTO
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        T: From<S>,
    {
        let total_pages = page.total_pages();
        let page = page.map(T::from);
        Self {
            content: page.items,
            page_number: page.request.page,
            page_size: page.request.size,
            total_pages,
            total_elements: page.total_elements,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Eviction algorithm in use
    pub algorithm: EvictionAlgorithm,
    /// Maximum number of cached comments
    pub capacity: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of explicit removals and invalidations
    pub removals: u64,
    /// Read-through fills dropped after a concurrent invalidation
    pub stale_fills: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(algorithm: EvictionAlgorithm, capacity: usize, stats: &CacheStats) -> Self {
        Self {
            algorithm,
            capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            removals: stats.removals,
            stale_fills: stats.stale_fills,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
