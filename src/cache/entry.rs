//! Cache entries and their bookkeeping metadata

use crate::cache::types::CacheKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A stored value with its metadata. Entries never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    /// The cache key
    pub key: CacheKey,

    /// The cached value
    pub value: V,

    /// Entry metadata
    pub metadata: CacheMetadata,
}

impl<V> CacheEntry<V> {
    /// Create a new cache entry
    pub fn new(key: CacheKey, value: V) -> Self {
        let now = Utc::now();

        Self {
            key,
            value,
            metadata: CacheMetadata {
                created_at: now,
                updated_at: now,
                version: 1,
            },
        }
    }

    /// Replace the value wholesale and bump the version
    pub fn replace_value(&mut self, new_value: V) {
        self.value = new_value;
        self.metadata.updated_at = Utc::now();
        self.metadata.version += 1;
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        (Utc::now() - self.metadata.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

/// Metadata associated with a cache entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheMetadata {
    /// When the entry was first stored
    pub created_at: DateTime<Utc>,

    /// When the value was last replaced
    pub updated_at: DateTime<Utc>,

    /// Version number (incremented on every overwrite)
    pub version: u64,
}

impl CacheMetadata {
    /// Whether the entry has been overwritten since it was created
    pub fn is_rewritten(&self) -> bool {
        self.version > 1
    }
}
