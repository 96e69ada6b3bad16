//! In-memory cache backend

use crate::cache::{
    entry::CacheEntry,
    traits::Cache,
    types::{CacheKey, CacheStats},
};
use std::cell::Cell;
use std::collections::HashMap;
use tracing::{debug, info};

/// Unbounded in-memory cache
///
/// This implementation provides:
/// - Plain `HashMap` storage with no eviction and no expiry
/// - Per-entry creation time and overwrite version
/// - Hit/miss/write counters for diagnostics
///
/// It is not synchronized; wrap it in a lock to share it between threads.
#[derive(Debug)]
pub struct MemoryCache<V> {
    /// Main storage: key -> entry
    entries: HashMap<CacheKey, CacheEntry<V>>,

    /// Lookup counters, updated from `&self` fetches
    hits: Cell<u64>,
    misses: Cell<u64>,

    /// Number of `set` calls
    writes: u64,
}

impl<V> MemoryCache<V> {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: Cell::new(0),
            misses: Cell::new(0),
            writes: 0,
        }
    }

    /// Check if a key exists in the cache (does not count as a lookup)
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Borrow the full entry, metadata included
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// All keys currently stored, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Get number of entries in cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            writes: self.writes,
            entries: self.entries.len(),
        }
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Cache<V> for MemoryCache<V> {
    fn reset(&self) -> Self {
        info!(
            "Resetting memory cache ({} entries left behind)",
            self.entries.len()
        );
        Self::new()
    }

    fn set(&mut self, key: &str, value: V) {
        self.writes += 1;

        if let Some(existing) = self.entries.get_mut(key) {
            debug!("Updating existing cache entry: {}", key);
            existing.replace_value(value);
        } else {
            debug!("Inserting new cache entry: {}", key);
            self.entries
                .insert(key.to_string(), CacheEntry::new(key.to_string(), value));
        }
    }

    fn fetch(&self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.set(self.hits.get() + 1);
                debug!("Cache hit: {}", key);
                Some(entry.value.clone())
            }
            None => {
                self.misses.set(self.misses.get() + 1);
                debug!("Cache miss: {}", key);
                None
            }
        }
    }
}
