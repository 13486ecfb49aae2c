//! Open-ended payloads the protocol leaves untyped.

use std::hash::{Hash, Hasher};

use serde_json::{Map, Number, Value};

use super::{FromJson, JsonKind, ToJson};
use crate::guard::require;
use crate::ModelError;

/// Any non-null JSON value (`LSPAny` without the null member).
///
/// Hashing walks the tree with object keys in sorted order, so it agrees
/// with `Value`'s order-insensitive object equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LspAny(Value);

impl LspAny {
    /// Wraps `value`; JSON `null` is rejected with
    /// [`ModelError::InvalidArgument`].
    pub fn new(value: Value) -> Result<Self, ModelError> {
        require(Some(value).filter(|v| !v.is_null()), "value").map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl TryFrom<Value> for LspAny {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, ModelError> {
        Self::new(value)
    }
}

impl Hash for LspAny {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

impl FromJson for LspAny {
    fn accepts(value: &Value) -> bool {
        !value.is_null()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        if value.is_null() {
            return Err(ModelError::unrecognized_shape(JsonKind::Null));
        }
        Ok(Self(value.clone()))
    }
}

impl ToJson for LspAny {
    fn to_json(&self) -> Value {
        self.0.clone()
    }
}

/// Any JSON object (`LSPObject`). Used where the protocol accepts an empty
/// or open-ended options object alongside a boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LspObject(Map<String, Value>);

impl LspObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for LspObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Hash for LspObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_object(&self.0, state);
    }
}

impl FromJson for LspObject {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value
            .as_object()
            .map(|map| Self(map.clone()))
            .ok_or_else(|| ModelError::unrecognized_shape(JsonKind::of(value)))
    }
}

impl ToJson for LspObject {
    fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    JsonKind::of(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => hash_number(n, state),
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => hash_object(map, state),
    }
}

// Floats compare numerically, so `-0.0` hashes like `0.0`.
fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(i) = n.as_i64() {
        i.hash(state);
    } else if let Some(u) = n.as_u64() {
        u.hash(state);
    } else if let Some(f) = n.as_f64() {
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}

fn hash_object<H: Hasher>(map: &Map<String, Value>, state: &mut H) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.len().hash(state);
    for (key, value) in entries {
        key.hash(state);
        hash_value(value, state);
    }
}
