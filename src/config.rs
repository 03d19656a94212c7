//! Configuration Module
//!
//! Handles loading and validating server configuration from environment variables.

use std::env;

use crate::cache::EvictionAlgorithm;
use crate::error::ConfigError;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Eviction algorithm of the comment cache
    pub cache_algorithm: EvictionAlgorithm,
    /// Maximum number of comments the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ALGORITHM` - `lru` or `lfu` (required)
    /// - `CACHE_CAPACITY` - Positive number of cached comments (required)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_algorithm = lookup("CACHE_ALGORITHM")
            .ok_or(ConfigError::Missing("CACHE_ALGORITHM"))?
            .parse::<EvictionAlgorithm>()?;

        let raw_capacity = lookup("CACHE_CAPACITY").ok_or(ConfigError::Missing("CACHE_CAPACITY"))?;
        let cache_capacity = raw_capacity
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|capacity| *capacity > 0)
            .ok_or(ConfigError::InvalidCapacity(raw_capacity))?;

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        Ok(Self {
            cache_algorithm,
            cache_capacity,
            server_port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_algorithm: EvictionAlgorithm::Lru,
            cache_capacity: 100,
            server_port: 3000,
        }
    }
}
