//! Shape-discriminating JSON codec.
//!
//! Converts between generic [`serde_json::Value`] trees and typed records.
//! Union-typed fields carry no type tag on the wire; the JSON kind of the
//! value (and, for objects, which keys are present) decides which variant is
//! materialized. Encoding emits exactly the shape of the occupied variant.

mod any;
mod kind;
mod object;
mod scalar;
mod table;
mod union;

pub use any::{LspAny, LspObject};
pub use kind::JsonKind;
pub use object::{has_keys, ObjectReader, ObjectWriter};
pub use table::{Candidate, ShapeDecoder, ShapePredicate, ShapeTable};

use serde_json::Value;

use crate::{ModelError, Validate};

/// Types that can be materialized from a JSON value.
pub trait FromJson: Sized {
    /// Structural predicate used when this type is a union candidate.
    ///
    /// Returning `true` commits the union to this type; `from_json` may still
    /// fail on content (wrong nested field types, out-of-range numbers).
    fn accepts(value: &Value) -> bool;

    fn from_json(value: &Value) -> Result<Self, ModelError>;
}

/// Types that can be written back as a JSON value.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

pub fn decode<T: FromJson>(value: &Value) -> Result<T, ModelError> {
    T::from_json(value)
}

pub fn encode<T: ToJson + ?Sized>(value: &T) -> Value {
    value.to_json()
}

/// Encodes after checking that every required field is set.
pub fn encode_checked<T: ToJson + Validate + ?Sized>(value: &T) -> Result<Value, ModelError> {
    value.validate()?;
    Ok(value.to_json())
}

/// Parses JSON text and decodes it. Syntax errors surface as
/// [`ModelError::Syntax`].
pub fn from_str<T: FromJson>(text: &str) -> Result<T, ModelError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ModelError::Syntax(e.to_string()))?;
    T::from_json(&value)
}

pub fn to_string<T: ToJson + ?Sized>(value: &T) -> String {
    value.to_json().to_string()
}
