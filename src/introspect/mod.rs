//! # Introspection
//!
//! Discovers the public fields of any `Serialize` value and memoizes the
//! resulting schema per entity identity.
//!
//! Control flow for one call:
//!
//! 1. absent or non-struct values give an empty schema
//! 2. the identity is the explicit one, or the value's type path when the type is named
//! 3. with an identity, the cache is consulted: a hit keeps the cached field
//!    set and reads every value again from the live instance; a miss derives
//!    the schema from scratch
//! 4. the schema is stored back under the identity before it is returned
//!
//! ## Limitations
//!
//! Fields are discovered through `Serialize::serialize_struct`. A struct
//! that serializes as a map instead is treated like any other non-struct
//! value and yields an empty, uncached schema. This covers structs with a
//! `#[serde(flatten)]` field and hand-written `Serialize` impls built on
//! `serialize_map`. Map keys carry no declared type, so such values cannot
//! be described field by field.
//!
//! Fields skipped through `skip_serializing_if` are not part of a schema
//! derived from a value that skipped them. Once an identity is cached, a
//! remembered field that a later value skips is reported with the value
//! `null`.
//!
//! ```rust
//! use ouroboros_inspect::Introspector;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> ouroboros_inspect::Result<()> {
//! let mut introspector = Introspector::new();
//!
//! let first = introspector.inspect(&Person { name: "Karl".into(), age: 25 })?;
//! assert!(!first.from_cache);
//!
//! let second = introspector.inspect(&Person { name: "Karl".into(), age: 30 })?;
//! assert!(second.from_cache);
//! assert_eq!(second.schema.value_of("Age"), Some("30"));
//! assert_eq!(second.schema.names_as_csv(), "Age,Name");
//! # Ok(())
//! # }
//! ```

pub(crate) mod capture;
pub mod config;
pub mod default;
pub mod identity;
pub mod inspector;

pub use capture::{SKIPPED_VALUE, UNRENDERABLE_VALUE};
pub use config::{FieldVisibility, InspectConfig, InspectConfigBuilder, TypeDescriptorStyle};
pub use default::{inspect, inspect_as, reset_default_cache, with_default_introspector};
pub use identity::{defining_scope, describe_type, short_type_name, EntityIdentity};
pub use inspector::{Inspection, Introspector};
