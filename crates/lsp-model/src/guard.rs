//! Non-null precondition for required fields.

use crate::ModelError;

/// Returns the value if present, otherwise [`ModelError::InvalidArgument`]
/// naming `field`.
///
/// Every required-field setter routes its argument through this check, so a
/// record never holds an unset required field after a successful call.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ModelError> {
    value.ok_or_else(|| ModelError::invalid_argument(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_present_values_through() {
        assert_eq!(require(Some(3), "line"), Ok(3));
    }

    #[test]
    fn rejects_absent_values_with_field_name() {
        let err = require::<String>(None, "uri").unwrap_err();
        assert_eq!(err, ModelError::invalid_argument("uri"));
        assert_eq!(err.to_string(), "uri must not be null");
    }
}
