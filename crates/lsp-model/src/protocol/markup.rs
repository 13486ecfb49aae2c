//! Rich-text payloads: `MarkupContent` and the legacy `MarkedString`.

use serde_json::Value;

use crate::codec::{has_keys, FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// Well-known values of [`MarkupContent::kind`].
pub struct MarkupKind;

impl MarkupKind {
    pub const PLAINTEXT: &'static str = "plaintext";
    pub const MARKDOWN: &'static str = "markdown";
}

// -------------------------------------------------------------------------
// MarkupContent

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkupContent {
    kind: Option<String>,
    value: Option<String>,
}

impl MarkupContent {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            value: Some(value.into()),
        }
    }

    pub fn markdown(value: impl Into<String>) -> Self {
        Self::new(MarkupKind::MARKDOWN, value)
    }

    pub fn plaintext(value: impl Into<String>) -> Self {
        Self::new(MarkupKind::PLAINTEXT, value)
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_kind(&mut self, kind: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.kind = Some(require(kind.into(), "kind")?);
        Ok(())
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.value = Some(require(value.into(), "value")?);
        Ok(())
    }
}

impl FromJson for MarkupContent {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["kind", "value"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            kind: Some(obj.required("kind")?),
            value: Some(obj.required("value")?),
        })
    }
}

impl ToJson for MarkupContent {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("kind", &self.kind).optional("value", &self.value);
        out.finish()
    }
}

impl Validate for MarkupContent {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.kind, "kind")?;
        validate::required(&self.value, "value")
    }
}

// -------------------------------------------------------------------------
// MarkedString

/// A code block in a given language. The plain-string form of a marked
/// string is modelled as the left side of `Either<String, MarkedString>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkedString {
    language: Option<String>,
    value: Option<String>,
}

impl MarkedString {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            value: Some(value.into()),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.language = Some(require(language.into(), "language")?);
        Ok(())
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.value = Some(require(value.into(), "value")?);
        Ok(())
    }
}

impl FromJson for MarkedString {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["language", "value"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            language: Some(obj.required("language")?),
            value: Some(obj.required("value")?),
        })
    }
}

impl ToJson for MarkedString {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("language", &self.language)
            .optional("value", &self.value);
        out.finish()
    }
}

impl Validate for MarkedString {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.language, "language")?;
        validate::required(&self.value, "value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn predicates_follow_required_keys() {
        let markup = json!({"kind": "markdown", "value": "# hi"});
        let marked = json!({"language": "go", "value": "b"});
        assert!(MarkupContent::accepts(&markup));
        assert!(!MarkupContent::accepts(&marked));
        assert!(MarkedString::accepts(&marked));
        assert!(!MarkedString::accepts(&markup));
    }

    #[test]
    fn markup_round_trip() {
        let value = json!({"kind": "plaintext", "value": "x"});
        let content = MarkupContent::from_json(&value).unwrap();
        assert_eq!(content, MarkupContent::plaintext("x"));
        assert_eq!(content.to_json(), value);
    }

    #[test]
    fn unset_required_fields_fail_validation() {
        let mut marked = MarkedString::default();
        assert_eq!(marked.validate(), Err(ModelError::missing_field("language")));
        marked.set_language("rust".to_string()).unwrap();
        assert_eq!(marked.validate(), Err(ModelError::missing_field("value")));
        assert_eq!(
            marked.set_value(None),
            Err(ModelError::invalid_argument("value"))
        );
    }
}
