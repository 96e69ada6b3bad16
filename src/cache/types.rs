//! Core type definitions for the cache system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache key type - entries are addressed by plain strings
pub type CacheKey = String;

/// Statistics for cache diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total number of fetches that found an entry
    pub hits: u64,

    /// Total number of fetches that found nothing
    pub misses: u64,

    /// Total number of `set` calls, overwrites included
    pub writes: u64,

    /// Number of entries currently in cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculate cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Calculate miss rate as a percentage
    pub fn miss_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            (self.misses as f64 / total as f64) * 100.0
        }
    }

    /// Total number of fetches
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheStats {{ hits: {}, misses: {}, hit_rate: {:.2}%, writes: {}, entries: {} }}",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.writes,
            self.entries
        )
    }
}
