//! Entity identity and type descriptors

use crate::introspect::config::TypeDescriptorStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name a schema is cached under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "name", rename_all = "lowercase")]
pub enum EntityIdentity {
    /// Supplied by the caller
    Explicit(String),
    /// Taken from the fully qualified name of the inspected type
    Derived(String),
}

impl EntityIdentity {
    /// Derive an identity from a type.
    ///
    /// `record_name` is the container name the value reported while
    /// serializing. An empty name marks an anonymous record, and so does a
    /// type path without a defining scope. Neither gets an identity.
    pub fn derive(type_name: &str, record_name: &str) -> Option<Self> {
        if record_name.is_empty() {
            return None;
        }

        let type_name = strip_references(type_name);
        defining_scope(type_name)?;
        Some(EntityIdentity::Derived(type_name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityIdentity::Explicit(name) | EntityIdentity::Derived(name) => name,
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, EntityIdentity::Derived(_))
    }
}

impl fmt::Display for EntityIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn strip_references(mut type_name: &str) -> &str {
    loop {
        if let Some(rest) = type_name.strip_prefix("&mut ") {
            type_name = rest;
        } else if let Some(rest) = type_name.strip_prefix('&') {
            type_name = rest;
        } else {
            return type_name;
        }
    }
}

/// Module path a type is declared in, ignoring paths inside generic
/// arguments. `None` for primitives, tuples, arrays and slices.
pub fn defining_scope(type_name: &str) -> Option<&str> {
    let bytes = type_name.as_bytes();
    let mut depth = 0usize;
    let mut last_separator = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                last_separator = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    match last_separator {
        Some(0) | None => None,
        Some(idx) => Some(&type_name[..idx]),
    }
}

/// Strip module paths from every segment of a type name:
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len());
    let mut segment_start = 0;
    let mut chars = type_name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }

        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }

    out
}

/// Render a declared type in the configured style
pub fn describe_type(type_name: &str, style: TypeDescriptorStyle) -> String {
    match style {
        TypeDescriptorStyle::Short => short_type_name(type_name),
        TypeDescriptorStyle::Qualified => type_name.to_string(),
    }
}
