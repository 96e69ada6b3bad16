//! Schema model
//!
//! A [`Schema`] maps each public field name of an inspected value to a
//! [`PropertyRecord`] holding its declared type and current value.

pub mod names;
pub mod types;

pub use names::{CSV_SEPARATOR, SQL_SEPARATOR};
pub use types::{PropertyRecord, Schema};
