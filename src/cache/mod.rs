//! # Schema Cache
//!
//! A minimal string-keyed cache used to memoize derived schemas.
//!
//! ## Features
//!
//! - **Three-operation contract**: [`Cache`] exposes only `reset`, `set` and `fetch`
//! - **Pluggable backends**: the introspector is generic over [`Cache`]
//! - **No eviction, no expiry**: entries live until the cache is replaced by `reset`
//!
//! ## Example
//!
//! ```rust
//! use ouroboros_inspect::cache::{Cache, MemoryCache};
//!
//! let mut cache = MemoryCache::new();
//! cache.set("query:123", "cached response".to_string());
//!
//! if let Some(value) = cache.fetch("query:123") {
//!     println!("Cache hit: {}", value);
//! }
//!
//! // A reset hands back a clean cache; the old one is unaffected.
//! let cache = cache.reset();
//! assert!(cache.fetch("query:123").is_none());
//! ```

pub mod entry;
pub mod store;
pub mod traits;
pub mod types;

pub use entry::{CacheEntry, CacheMetadata};
pub use store::MemoryCache;
pub use traits::Cache;
pub use types::{CacheKey, CacheStats};
