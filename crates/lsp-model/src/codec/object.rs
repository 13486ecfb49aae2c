//! Field-level helpers for decoding and encoding record objects.

use serde_json::{Map, Value};

use super::{FromJson, JsonKind, ShapeTable, ToJson};
use crate::ModelError;

/// Returns `true` when `value` is an object carrying every key in `keys`
/// with a non-null value.
///
/// Records use this as their structural predicate: an object is a candidate
/// for a record when all of the record's required keys are present.
pub fn has_keys(value: &Value, keys: &[&str]) -> bool {
    value.as_object().is_some_and(|object| {
        keys.iter()
            .all(|key| object.get(*key).is_some_and(|v| !v.is_null()))
    })
}

/// Read-only view over a JSON object being decoded into a record.
///
/// Absent keys and keys holding JSON `null` are treated alike: an optional
/// field is left unset, a required field fails with
/// [`ModelError::MissingField`]. Errors from nested values are re-rooted at
/// the key being read.
#[derive(Debug, Clone, Copy)]
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ModelError> {
        value
            .as_object()
            .map(|object| Self { object })
            .ok_or_else(|| ModelError::unrecognized_shape(JsonKind::of(value)))
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.present(key).is_some()
    }

    pub fn required<T: FromJson>(&self, key: &str) -> Result<T, ModelError> {
        let value = self
            .present(key)
            .ok_or_else(|| ModelError::missing_field(key))?;
        T::from_json(value).map_err(|e| e.within(key))
    }

    pub fn optional<T: FromJson>(&self, key: &str) -> Result<Option<T>, ModelError> {
        self.present(key)
            .map(|value| T::from_json(value).map_err(|e| e.within(key)))
            .transpose()
    }

    /// Decodes a required union field through an explicit shape table.
    pub fn required_with<T>(&self, key: &str, table: &ShapeTable<'_, T>) -> Result<T, ModelError> {
        let value = self
            .present(key)
            .ok_or_else(|| ModelError::missing_field(key))?;
        table.decode(value).map_err(|e| e.within(key))
    }

    pub fn optional_with<T>(
        &self,
        key: &str,
        table: &ShapeTable<'_, T>,
    ) -> Result<Option<T>, ModelError> {
        self.present(key)
            .map(|value| table.decode(value).map_err(|e| e.within(key)))
            .transpose()
    }

    /// Checks that a string constant such as a report `kind` has the
    /// expected value.
    pub fn constant(&self, key: &str, expected: &str) -> Result<(), ModelError> {
        let actual: String = self.required(key)?;
        if actual == expected {
            Ok(())
        } else {
            Err(
                ModelError::invalid_value(format!("expected \"{expected}\", got \"{actual}\""))
                    .within(key),
            )
        }
    }
}

/// Builds the JSON object for a record, omitting unset fields.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<T: ToJson + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        self.object.insert(key.to_string(), value.to_json());
        self
    }

    pub fn optional<T: ToJson>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.field(key, value);
        }
        self
    }

    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn has_keys_ignores_null_members() {
        assert!(has_keys(&json!({"a": 1, "b": "x"}), &["a", "b"]));
        assert!(!has_keys(&json!({"a": 1, "b": null}), &["a", "b"]));
        assert!(!has_keys(&json!([1]), &[]));
        assert!(has_keys(&json!({}), &[]));
    }

    #[test]
    fn reader_rejects_non_objects() {
        assert_eq!(
            ObjectReader::new(&json!("x")).unwrap_err(),
            ModelError::unrecognized_shape(JsonKind::String)
        );
    }

    #[test]
    fn null_and_absent_are_equivalent() {
        let value = json!({"present": 1, "nulled": null});
        let reader = ObjectReader::new(&value).unwrap();
        assert_eq!(reader.optional::<i32>("nulled").unwrap(), None);
        assert_eq!(reader.optional::<i32>("absent").unwrap(), None);
        assert_eq!(reader.optional::<i32>("present").unwrap(), Some(1));
        assert_eq!(
            reader.required::<i32>("nulled").unwrap_err(),
            ModelError::missing_field("nulled")
        );
    }

    #[test]
    fn nested_errors_name_the_key() {
        let value = json!({"count": "three"});
        let reader = ObjectReader::new(&value).unwrap();
        let err = reader.required::<i32>("count").unwrap_err();
        assert_eq!(err.field(), Some("count"));
        assert!(matches!(
            err,
            ModelError::UnrecognizedShape {
                kind: JsonKind::String,
                ..
            }
        ));
    }

    #[test]
    fn constant_mismatch_is_invalid_value() {
        let value = json!({"kind": "partial"});
        let reader = ObjectReader::new(&value).unwrap();
        assert!(reader.constant("kind", "partial").is_ok());
        let err = reader.constant("kind", "full").unwrap_err();
        assert_eq!(err.field(), Some("kind"));
    }

    #[test]
    fn writer_skips_unset_fields() {
        let mut writer = ObjectWriter::new();
        writer
            .field("uri", "file:///a")
            .optional::<i32>("version", &None)
            .optional("line", &Some(3));
        assert_eq!(writer.finish(), json!({"uri": "file:///a", "line": 3}));
    }
}
