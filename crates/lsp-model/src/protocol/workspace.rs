//! Workspace-level messages with untyped or primitive payloads.

use serde_json::Value;

use crate::codec::{has_keys, FromJson, LspAny, ObjectReader, ObjectWriter, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// `workspace/didChangeConfiguration` notification. The settings payload is
/// server-defined and kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DidChangeConfigurationParams {
    settings: Option<LspAny>,
}

impl DidChangeConfigurationParams {
    pub fn new(settings: LspAny) -> Self {
        Self {
            settings: Some(settings),
        }
    }

    pub fn settings(&self) -> Option<&LspAny> {
        self.settings.as_ref()
    }

    pub fn set_settings(&mut self, settings: impl Into<Option<LspAny>>) -> Result<(), ModelError> {
        self.settings = Some(require(settings.into(), "settings")?);
        Ok(())
    }
}

impl FromJson for DidChangeConfigurationParams {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["settings"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            settings: Some(obj.required("settings")?),
        })
    }
}

impl ToJson for DidChangeConfigurationParams {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("settings", &self.settings);
        out.finish()
    }
}

impl Validate for DidChangeConfigurationParams {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.settings, "settings")
    }
}

/// Error data of a failed `initialize` request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InitializeError {
    retry: bool,
}

impl InitializeError {
    pub fn new(retry: bool) -> Self {
        Self { retry }
    }

    /// Whether the client should retry `initialize` after showing the
    /// error to the user.
    pub fn retry(&self) -> bool {
        self.retry
    }

    pub fn set_retry(&mut self, retry: bool) {
        self.retry = retry;
    }
}

impl FromJson for InitializeError {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["retry"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            retry: obj.required("retry")?,
        })
    }
}

impl ToJson for InitializeError {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.field("retry", &self.retry);
        out.finish()
    }
}

impl Validate for InitializeError {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode_checked};
    use serde_json::json;

    #[test]
    fn settings_keep_arbitrary_json() {
        let value = json!({"settings": {"rust-analyzer": {"checkOnSave": true}, "tabs": [2, 4]}});
        let params = DidChangeConfigurationParams::from_json(&value).unwrap();
        assert_eq!(
            params.settings().map(LspAny::as_value),
            Some(&json!({"rust-analyzer": {"checkOnSave": true}, "tabs": [2, 4]}))
        );
        assert_eq!(params.to_json(), value);

        let scalar = DidChangeConfigurationParams::from_json(&json!({"settings": 1})).unwrap();
        assert_eq!(scalar.settings().map(LspAny::as_value), Some(&json!(1)));
    }

    #[test]
    fn null_settings_are_missing() {
        assert_eq!(
            DidChangeConfigurationParams::from_json(&json!({"settings": null})).unwrap_err(),
            ModelError::missing_field("settings")
        );
        let mut params = DidChangeConfigurationParams::default();
        assert_eq!(params.set_settings(None), Err(ModelError::invalid_argument("settings")));
    }

    #[test]
    fn settings_survive_checked_round_trip() {
        assert_eq!(
            LspAny::new(Value::Null),
            Err(ModelError::invalid_argument("value"))
        );
        let settings = LspAny::new(json!({"indent": 0.0})).unwrap();
        let params = DidChangeConfigurationParams::new(settings);
        let value = encode_checked(&params).unwrap();
        assert_eq!(value, json!({"settings": {"indent": 0.0}}));
        assert_eq!(decode::<DidChangeConfigurationParams>(&value).unwrap(), params);
    }

    #[test]
    fn initialize_error_requires_retry() {
        assert_eq!(
            InitializeError::from_json(&json!({})).unwrap_err(),
            ModelError::missing_field("retry")
        );
        let err = InitializeError::from_json(&json!({"retry": true})).unwrap();
        assert!(err.retry());
        assert_eq!(err.to_json(), json!({"retry": true}));
        assert_eq!(InitializeError::default().to_json(), json!({"retry": false}));
    }
}
