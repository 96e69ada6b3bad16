//! Configuration for the introspector

use crate::error::{InspectError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding [`InspectConfig::key_prefix`]
pub const ENV_KEY_PREFIX: &str = "INSPECT_KEY_PREFIX";
/// Environment variable overriding [`InspectConfig::visibility`]
pub const ENV_FIELD_VISIBILITY: &str = "INSPECT_FIELD_VISIBILITY";
/// Environment variable overriding [`InspectConfig::type_style`]
pub const ENV_TYPE_STYLE: &str = "INSPECT_TYPE_STYLE";

/// Default namespace for schema entries in a shared cache
pub const DEFAULT_KEY_PREFIX: &str = "i__";

/// Rule deciding which serialized fields count as public
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVisibility {
    /// Public iff the field name starts with an uppercase letter
    #[default]
    Exported,
    /// Every field the value serializes is public
    Serialized,
}

impl FieldVisibility {
    /// Apply the rule to a serialized field name
    pub fn is_public(&self, name: &str) -> bool {
        match self {
            FieldVisibility::Exported => name.chars().next().is_some_and(char::is_uppercase),
            FieldVisibility::Serialized => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldVisibility::Exported => "exported",
            FieldVisibility::Serialized => "serialized",
        }
    }
}

impl fmt::Display for FieldVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldVisibility {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exported" => Ok(FieldVisibility::Exported),
            "serialized" | "all" => Ok(FieldVisibility::Serialized),
            other => Err(InspectError::ConfigError(format!(
                "unknown field visibility '{}'",
                other
            ))),
        }
    }
}

/// How declared field types are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDescriptorStyle {
    /// Module paths stripped: `Option<String>`
    #[default]
    Short,
    /// Full compiler type name: `core::option::Option<alloc::string::String>`
    Qualified,
}

impl TypeDescriptorStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeDescriptorStyle::Short => "short",
            TypeDescriptorStyle::Qualified => "qualified",
        }
    }
}

impl fmt::Display for TypeDescriptorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeDescriptorStyle {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(TypeDescriptorStyle::Short),
            "qualified" | "full" => Ok(TypeDescriptorStyle::Qualified),
            other => Err(InspectError::ConfigError(format!(
                "unknown type descriptor style '{}'",
                other
            ))),
        }
    }
}

/// Configuration for an [`Introspector`](crate::introspect::Introspector)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Prepended to every identity to form the cache key.
    /// Keeps schema entries apart from other users of the same cache.
    pub key_prefix: String,

    /// Which fields are reported
    pub visibility: FieldVisibility,

    /// How declared types are rendered
    pub type_style: TypeDescriptorStyle,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            visibility: FieldVisibility::default(),
            type_style: TypeDescriptorStyle::default(),
        }
    }
}

impl InspectConfig {
    /// Create a new builder for introspector configuration
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::default()
    }

    /// Load configuration from the environment, falling back to defaults
    /// for unset variables
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(prefix) = std::env::var(ENV_KEY_PREFIX) {
            builder = builder.key_prefix(prefix);
        }
        if let Ok(visibility) = std::env::var(ENV_FIELD_VISIBILITY) {
            builder = builder.visibility(visibility.parse()?);
        }
        if let Ok(style) = std::env::var(ENV_TYPE_STYLE) {
            builder = builder.type_style(style.parse()?);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.key_prefix.is_empty() {
            return Err(InspectError::ConfigError(
                "key_prefix must not be empty".to_string(),
            ));
        }

        if self.key_prefix.chars().any(char::is_whitespace) {
            return Err(InspectError::ConfigError(
                "key_prefix must not contain whitespace".to_string(),
            ));
        }

        Ok(())
    }

    /// Cache key for an identity
    pub fn cache_key(&self, identity: &str) -> String {
        format!("{}{}", self.key_prefix, identity)
    }
}

/// Builder for introspector configuration
#[derive(Debug, Default)]
pub struct InspectConfigBuilder {
    key_prefix: Option<String>,
    visibility: Option<FieldVisibility>,
    type_style: Option<TypeDescriptorStyle>,
}

impl InspectConfigBuilder {
    /// Set the cache key prefix
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the visibility rule
    pub fn visibility(mut self, visibility: FieldVisibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Set the type descriptor style
    pub fn type_style(mut self, style: TypeDescriptorStyle) -> Self {
        self.type_style = Some(style);
        self
    }

    /// Build the configuration
    pub fn build(self) -> InspectConfig {
        let defaults = InspectConfig::default();

        InspectConfig {
            key_prefix: self.key_prefix.unwrap_or(defaults.key_prefix),
            visibility: self.visibility.unwrap_or(defaults.visibility),
            type_style: self.type_style.unwrap_or(defaults.type_style),
        }
    }
}
