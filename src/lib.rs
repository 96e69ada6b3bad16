//! # Ouroboros Inspect (ouroboros-inspect)
//!
//! Runtime field-schema discovery for Rust values, with a memoizing schema cache.
//!
//! ## Features
//!
//! - Field enumeration for any `serde::Serialize` struct: name, declared type, current value
//! - Configurable visibility rule (exported-name convention or every serialized field)
//! - Schema memoization keyed by an explicit or type-derived entity identity
//! - Values are always read from the live instance, even on a cache hit
//! - Pluggable cache backends behind a three-operation [`Cache`] contract
//! - A resettable process-wide default introspector
//!
//! ## Owning an Introspector
//!
//! ```rust
//! use ouroboros_inspect::{Introspector, MemoryCache, InspectConfig, FieldVisibility};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     id: u64,
//!     customer: String,
//! }
//!
//! # fn main() -> ouroboros_inspect::Result<()> {
//! let config = InspectConfig::builder()
//!     .visibility(FieldVisibility::Serialized)
//!     .build();
//! let mut introspector = Introspector::with_config(MemoryCache::new(), config)?;
//!
//! let (schema, from_cache) = introspector
//!     .inspect_as("order", &Order { id: 7, customer: "acme".into() })?
//!     .into_parts();
//!
//! assert!(!from_cache);
//! assert_eq!(schema.names_as_sql(), "customer, id");
//! assert_eq!(schema.value_of("id"), Some("7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Default Introspector
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Invoice {
//!     number: u32,
//!     internal_note: String,
//! }
//!
//! # fn main() -> ouroboros_inspect::Result<()> {
//! let invoice = Invoice { number: 1, internal_note: "n/a".into() };
//! let inspection = ouroboros_inspect::inspect_as("doc-invoice", &invoice)?;
//! assert_eq!(inspection.schema.names_as_csv(), "InternalNote,Number");
//!
//! ouroboros_inspect::reset_default_cache();
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod introspect;
pub mod schema;

// Re-export main types for convenience
pub use cache::{Cache, CacheEntry, CacheKey, CacheMetadata, CacheStats, MemoryCache};
pub use error::{InspectError, Result};
pub use introspect::{
    inspect, inspect_as, reset_default_cache, with_default_introspector, EntityIdentity,
    FieldVisibility, InspectConfig, InspectConfigBuilder, Inspection, Introspector,
    TypeDescriptorStyle, SKIPPED_VALUE, UNRENDERABLE_VALUE,
};
pub use schema::{PropertyRecord, Schema};
