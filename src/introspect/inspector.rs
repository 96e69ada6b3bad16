//! The introspector: schema derivation, cache lookup and value refresh

use crate::cache::{Cache, MemoryCache};
use crate::error::{InspectError, Result};
use crate::introspect::capture::{capture, CapturedRecord, Shape, SKIPPED_VALUE};
use crate::introspect::config::InspectConfig;
use crate::introspect::identity::{describe_type, EntityIdentity};
use crate::schema::{PropertyRecord, Schema};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of one inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Public fields of the inspected value
    pub schema: Schema,
    /// Whether the field set came from the cache
    pub from_cache: bool,
    /// Identity the schema is cached under, if any
    pub identity: Option<EntityIdentity>,
}

impl Inspection {
    fn empty() -> Self {
        Self {
            schema: Schema::new(),
            from_cache: false,
            identity: None,
        }
    }

    pub fn into_parts(self) -> (Schema, bool) {
        (self.schema, self.from_cache)
    }
}

/// Derives field schemas from values and memoizes them per entity identity
///
/// Only the field set and declared types are memoized. On a cache hit every
/// value is read again from the instance passed to that call, so results
/// never carry values from an earlier call.
///
/// The field set of an identity is fixed by the first inspection. Inspecting
/// a differently shaped value under the same identity fails with
/// [`InspectError::MissingField`] when a remembered field is gone.
#[derive(Debug)]
pub struct Introspector<C = MemoryCache<Schema>> {
    cache: C,
    config: InspectConfig,
}

impl Introspector<MemoryCache<Schema>> {
    /// Introspector backed by a fresh in-memory cache
    pub fn new() -> Self {
        Self::with_cache(MemoryCache::new())
    }
}

impl Default for Introspector<MemoryCache<Schema>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cache<Schema>> Introspector<C> {
    /// Introspector over a caller-supplied cache backend
    pub fn with_cache(cache: C) -> Self {
        Self {
            cache,
            config: InspectConfig::default(),
        }
    }

    /// Introspector with explicit settings; rejects a config that fails
    /// [`InspectConfig::validate`]
    pub fn with_config(cache: C, config: InspectConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { cache, config })
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Swap the cache for an empty one. Schemas already handed out are unaffected.
    pub fn reset(&mut self) {
        info!("Resetting schema cache");
        self.cache = self.cache.reset();
    }

    /// Inspect `value`, deriving its identity from its type
    pub fn inspect<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<Inspection> {
        self.inspect_with(None, value)
    }

    /// Inspect `value` under an explicit identity
    pub fn inspect_as<T: ?Sized + Serialize>(
        &mut self,
        identity: &str,
        value: &T,
    ) -> Result<Inspection> {
        self.inspect_with(Some(identity), value)
    }

    /// Inspect `value`; `identity` overrides the derived one when given
    pub fn inspect_with<T: ?Sized + Serialize>(
        &mut self,
        identity: Option<&str>,
        value: &T,
    ) -> Result<Inspection> {
        let record = match capture(value, self.config.visibility)? {
            Shape::Record(record) => record,
            Shape::Absent => {
                debug!("Nothing to inspect: value is absent");
                return Ok(Inspection::empty());
            }
            Shape::Opaque(kind) => {
                debug!("Nothing to inspect: {} is not a record", kind);
                return Ok(Inspection::empty());
            }
        };

        let identity = match identity {
            Some(explicit) => Some(EntityIdentity::Explicit(explicit.to_string())),
            None => EntityIdentity::derive(std::any::type_name::<T>(), record.name),
        };

        let Some(identity) = identity else {
            debug!("Anonymous record, schema will not be cached");
            return Ok(Inspection {
                schema: self.derive(record),
                from_cache: false,
                identity: None,
            });
        };

        let key = self.config.cache_key(identity.as_str());
        let (schema, from_cache) = match self.cache.fetch(&key) {
            Some(cached) => (refresh(&key, &cached, &record)?, true),
            None => (self.derive(record), false),
        };

        debug!("Storing schema for {} ({} fields)", key, schema.len());
        self.cache.set(&key, schema.clone());

        Ok(Inspection {
            schema,
            from_cache,
            identity: Some(identity),
        })
    }

    /// Build a schema from scratch out of the captured public fields
    fn derive(&self, record: CapturedRecord) -> Schema {
        let style = self.config.type_style;

        record
            .fields
            .into_iter()
            .map(|field| {
                PropertyRecord::new(field.name, describe_type(field.type_name, style), field.value)
            })
            .collect()
    }
}

/// Rebuild a cached schema with values read from the live record.
/// A field the value skipped this time reads as [`SKIPPED_VALUE`].
fn refresh(key: &str, cached: &Schema, record: &CapturedRecord) -> Result<Schema> {
    cached
        .iter()
        .map(|property| match record.field(&property.name) {
            Some(field) => Ok(property.refreshed(field.value.clone())),
            None if record.is_skipped(&property.name) => {
                debug!("Field {} skipped by value inspected as {}", property.name, key);
                Ok(property.refreshed(SKIPPED_VALUE))
            }
            None => {
                warn!(
                    "Cached field {} is missing from value inspected as {}",
                    property.name, key
                );
                Err(InspectError::MissingField {
                    key: key.to_string(),
                    field: property.name.clone(),
                })
            }
        })
        .collect()
}
