//! News Comments - A comment service for news items
//!
//! Serves comments over HTTP from a store fronted by a bounded LRU/LFU cache.

pub mod api;
pub mod cache;
pub mod comments;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
