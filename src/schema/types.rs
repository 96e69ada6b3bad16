//! Type definitions for inspected schemas

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// A single public field discovered on an inspected value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Field identifier
    pub name: String,
    /// Human-readable type descriptor
    pub declared_type: String,
    /// Current value rendered as text
    pub value: String,
}

impl PropertyRecord {
    /// Create a new property record
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            value: value.into(),
        }
    }

    /// A new record with the same name and type but a recomputed value
    pub fn refreshed(&self, value: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            declared_type: self.declared_type.clone(),
            value: value.into(),
        }
    }
}

/// All public fields of one inspected value, keyed by field name
///
/// Iteration order is unspecified. Use [`Schema::names`] or
/// [`Schema::records`] for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    properties: HashMap<String, PropertyRecord>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn insert(&mut self, record: PropertyRecord) -> Option<PropertyRecord> {
        self.properties.insert(record.name.clone(), record)
    }

    /// Look up a record by field name
    pub fn get(&self, name: &str) -> Option<&PropertyRecord> {
        self.properties.get(name)
    }

    /// Shorthand for the rendered value of a field
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.value.as_str())
    }

    /// Check whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over records in unspecified order
    pub fn iter(&self) -> hash_map::Values<'_, String, PropertyRecord> {
        self.properties.values()
    }

    /// All records sorted by field name
    pub fn records(&self) -> Vec<&PropertyRecord> {
        let mut records: Vec<&PropertyRecord> = self.properties.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}

impl FromIterator<PropertyRecord> for Schema {
    fn from_iter<I: IntoIterator<Item = PropertyRecord>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for record in iter {
            schema.insert(record);
        }
        schema
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a PropertyRecord;
    type IntoIter = hash_map::Values<'a, String, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
