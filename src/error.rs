//! Error types for schema introspection
//!
//! Inspection has almost no failure surface: absent, non-aggregate and
//! anonymous inputs are answered with an empty or uncached schema. The
//! variants here cover what is left.

use std::fmt::Display;
use thiserror::Error;

/// Main error type for introspection operations
#[derive(Error, Debug)]
pub enum InspectError {
    /// A field remembered in the cached schema is not present on the live value.
    ///
    /// Values sharing an identity are expected to share a field set; this is
    /// raised when a caller breaks that expectation.
    #[error("Field '{field}' cached under '{key}' is missing from the inspected value")]
    MissingField { key: String, field: String },

    /// A `Serialize` impl failed while its fields were being enumerated
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The shared introspector was used from inside its own
    /// [`with_default_introspector`](crate::with_default_introspector) closure
    #[error("Default introspector is already in use on this thread")]
    Reentrant,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for introspection operations
pub type Result<T> = std::result::Result<T, InspectError>;

impl From<String> for InspectError {
    fn from(s: String) -> Self {
        InspectError::Other(s)
    }
}

impl From<&str> for InspectError {
    fn from(s: &str) -> Self {
        InspectError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for InspectError {
    fn from(e: serde_json::Error) -> Self {
        InspectError::SerializationError(e.to_string())
    }
}

impl serde::ser::Error for InspectError {
    fn custom<T: Display>(msg: T) -> Self {
        InspectError::SerializationError(msg.to_string())
    }
}
