//! Field enumeration through `serde`
//!
//! [`ShapeSerializer`] is a `Serializer` that does not produce output. It
//! records what a value looks like: absent, opaque (anything that is not a
//! struct) or a record with named fields. For each public field it keeps
//! the serialized name, the Rust type of the field and its value as text.
//! Non-public fields are dropped before their value is rendered.

use crate::error::{InspectError, Result};
use crate::introspect::config::FieldVisibility;
use serde::ser::{self, Impossible, Serialize, SerializeStruct, Serializer};
use serde_json::Value as JsonValue;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, trace};

/// Text reported for a value `serde_json` cannot represent
pub const UNRENDERABLE_VALUE: &str = "<unrenderable>";

/// Text reported for a field the value chose not to serialize
/// (`skip_serializing_if`); matches how an absent `Option` renders
pub const SKIPPED_VALUE: &str = "null";

/// One field as seen during serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CapturedField {
    pub name: &'static str,
    pub type_name: &'static str,
    pub value: String,
}

/// A struct value with its container name and public fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CapturedRecord {
    pub name: &'static str,
    pub fields: Vec<CapturedField>,
    /// Keys the value skipped on this serialization
    pub skipped: Vec<&'static str>,
}

impl CapturedRecord {
    pub fn field(&self, name: &str) -> Option<&CapturedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skipped.iter().any(|key| *key == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `None` or `()`
    Absent,
    /// Scalar, string, enum or collection; carries a short description
    Opaque(&'static str),
    Record(CapturedRecord),
}

#[derive(Debug, Error)]
pub(crate) enum CaptureError {
    #[error("value is not a record ({0})")]
    NotRecord(&'static str),

    #[error(transparent)]
    Inspect(#[from] InspectError),
}

impl ser::Error for CaptureError {
    fn custom<T: Display>(msg: T) -> Self {
        CaptureError::Inspect(InspectError::SerializationError(msg.to_string()))
    }
}

/// Determine the shape of `value`, keeping the fields `visibility` admits
pub(crate) fn capture<T: ?Sized + Serialize>(
    value: &T,
    visibility: FieldVisibility,
) -> Result<Shape> {
    match value.serialize(ShapeSerializer { visibility }) {
        Ok(shape) => Ok(shape),
        Err(CaptureError::NotRecord(kind)) => Ok(Shape::Opaque(kind)),
        Err(CaptureError::Inspect(e)) => Err(e),
    }
}

/// Render a field value as text: strings raw, everything else as compact JSON.
/// Values JSON cannot hold (maps with non-string keys, failing `Serialize`
/// impls) render as [`UNRENDERABLE_VALUE`].
pub(crate) fn render_value<T: ?Sized + Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(JsonValue::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(e) => {
            debug!("Field value cannot be rendered: {}", e);
            UNRENDERABLE_VALUE.to_string()
        }
    }
}

pub(crate) struct ShapeSerializer {
    visibility: FieldVisibility,
}

type Rejected = Impossible<Shape, CaptureError>;

impl Serializer for ShapeSerializer {
    type Ok = Shape;
    type Error = CaptureError;

    type SerializeSeq = Rejected;
    type SerializeTuple = Rejected;
    type SerializeTupleStruct = Rejected;
    type SerializeTupleVariant = Rejected;
    type SerializeMap = Rejected;
    type SerializeStruct = RecordCapture;
    type SerializeStructVariant = Rejected;

    fn serialize_bool(self, _v: bool) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("bool"))
    }

    fn serialize_i8(self, _v: i8) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_i16(self, _v: i16) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_i32(self, _v: i32) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_i64(self, _v: i64) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_u8(self, _v: u8) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_u16(self, _v: u16) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_u32(self, _v: u32) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_u64(self, _v: u64) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_i128(self, _v: i128) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_u128(self, _v: u128) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("integer"))
    }

    fn serialize_f32(self, _v: f32) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("float"))
    }

    fn serialize_f64(self, _v: f64) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("float"))
    }

    fn serialize_char(self, _v: char) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("char"))
    }

    fn serialize_str(self, _v: &str) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("bytes"))
    }

    fn serialize_none(self) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Absent)
    }

    fn serialize_some<T: ?Sized + Serialize>(
        self,
        value: &T,
    ) -> std::result::Result<Shape, CaptureError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Absent)
    }

    fn serialize_unit_struct(self, name: &'static str) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Record(CapturedRecord {
            name,
            fields: Vec::new(),
            skipped: Vec::new(),
        }))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("enum"))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> std::result::Result<Shape, CaptureError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Opaque("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> std::result::Result<RecordCapture, CaptureError> {
        Ok(RecordCapture {
            name,
            visibility: self.visibility,
            fields: Vec::with_capacity(len),
            skipped: Vec::new(),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Rejected, CaptureError> {
        Err(CaptureError::NotRecord("enum"))
    }
}

pub(crate) struct RecordCapture {
    name: &'static str,
    visibility: FieldVisibility,
    fields: Vec<CapturedField>,
    skipped: Vec<&'static str>,
}

impl SerializeStruct for RecordCapture {
    type Ok = Shape;
    type Error = CaptureError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> std::result::Result<(), CaptureError> {
        if !self.visibility.is_public(key) {
            trace!("Skipping non-public field {}.{}", self.name, key);
            return Ok(());
        }

        self.fields.push(CapturedField {
            name: key,
            type_name: std::any::type_name::<T>(),
            value: render_value(value),
        });
        Ok(())
    }

    fn skip_field(&mut self, key: &'static str) -> std::result::Result<(), CaptureError> {
        self.skipped.push(key);
        Ok(())
    }

    fn end(self) -> std::result::Result<Shape, CaptureError> {
        Ok(Shape::Record(CapturedRecord {
            name: self.name,
            fields: self.fields,
            skipped: self.skipped,
        }))
    }
}
