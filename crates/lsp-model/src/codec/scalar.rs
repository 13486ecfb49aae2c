//! Codec impls for scalars and homogeneous lists.

use serde_json::Value;

use super::{FromJson, JsonKind, ToJson};
use crate::ModelError;

fn shape_error(value: &Value) -> ModelError {
    ModelError::unrecognized_shape(JsonKind::of(value))
}

impl FromJson for String {
    fn accepts(value: &Value) -> bool {
        value.is_string()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| shape_error(value))
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToJson for str {
    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromJson for bool {
    fn accepts(value: &Value) -> bool {
        value.is_boolean()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        value.as_bool().ok_or_else(|| shape_error(value))
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Protocol `integer`: any JSON number that is integral and fits in `i32`.
impl FromJson for i32 {
    fn accepts(value: &Value) -> bool {
        value.is_number()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        if !value.is_number() {
            return Err(shape_error(value));
        }
        let n = value
            .as_i64()
            .ok_or_else(|| ModelError::invalid_value(format!("{value} is not an integer")))?;
        i32::try_from(n)
            .map_err(|_| ModelError::invalid_value(format!("{n} is out of range for integer")))
    }
}

impl ToJson for i32 {
    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Protocol `uinteger`: integral, non-negative, fits in `u32`.
impl FromJson for u32 {
    fn accepts(value: &Value) -> bool {
        value.is_number()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        if !value.is_number() {
            return Err(shape_error(value));
        }
        let n = value.as_u64().ok_or_else(|| {
            ModelError::invalid_value(format!("{value} is not an unsigned integer"))
        })?;
        u32::try_from(n)
            .map_err(|_| ModelError::invalid_value(format!("{n} is out of range for uinteger")))
    }
}

impl ToJson for u32 {
    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn accepts(value: &Value) -> bool {
        value.is_array()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let items = value.as_array().ok_or_else(|| shape_error(value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_json(item).map_err(|e| e.at_index(i)))
            .collect()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_reject_fractions_and_overflow() {
        assert_eq!(i32::from_json(&json!(-4)).unwrap(), -4);
        assert!(matches!(
            i32::from_json(&json!(1.5)),
            Err(ModelError::InvalidValue { .. })
        ));
        assert!(matches!(
            i32::from_json(&json!(1u64 << 40)),
            Err(ModelError::InvalidValue { .. })
        ));
        assert!(matches!(
            u32::from_json(&json!(-1)),
            Err(ModelError::InvalidValue { .. })
        ));
        assert_eq!(u32::from_json(&json!(7)).unwrap(), 7);
    }

    #[test]
    fn wrong_kind_is_unrecognized_shape() {
        assert_eq!(
            bool::from_json(&json!("true")),
            Err(ModelError::unrecognized_shape(JsonKind::String))
        );
        assert_eq!(
            String::from_json(&json!(null)),
            Err(ModelError::unrecognized_shape(JsonKind::Null))
        );
    }

    #[test]
    fn list_errors_carry_index() {
        let err = Vec::<String>::from_json(&json!(["a", 2, "c"])).unwrap_err();
        assert_eq!(err.field(), Some("[1]"));
    }

    #[test]
    fn list_round_trip() {
        let value = json!([1, 2, 3]);
        let items = Vec::<u32>::from_json(&value).unwrap();
        assert_eq!(items.to_json(), value);
    }
}
