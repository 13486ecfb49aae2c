//! Client capabilities for completion items.

use serde_json::Value;

use crate::codec::{has_keys, FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

int_enum! {
    /// Extra annotations that tweak the rendering of a completion item.
    pub enum CompletionItemTag {
        Deprecated = 1,
    }
}

int_enum! {
    /// How whitespace and indentation is handled during completion insertion.
    pub enum InsertTextMode {
        AsIs = 1,
        AdjustIndentation = 2,
    }
}

// -------------------------------------------------------------------------
// Nested capability records

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompletionItemTagSupportCapabilities {
    value_set: Option<Vec<CompletionItemTag>>,
}

impl CompletionItemTagSupportCapabilities {
    pub fn new(value_set: Vec<CompletionItemTag>) -> Self {
        Self {
            value_set: Some(value_set),
        }
    }

    pub fn value_set(&self) -> Option<&[CompletionItemTag]> {
        self.value_set.as_deref()
    }

    pub fn set_value_set(
        &mut self,
        value_set: impl Into<Option<Vec<CompletionItemTag>>>,
    ) -> Result<(), ModelError> {
        self.value_set = Some(require(value_set.into(), "valueSet")?);
        Ok(())
    }
}

impl FromJson for CompletionItemTagSupportCapabilities {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["valueSet"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            value_set: Some(obj.required("valueSet")?),
        })
    }
}

impl ToJson for CompletionItemTagSupportCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("valueSet", &self.value_set);
        out.finish()
    }
}

impl Validate for CompletionItemTagSupportCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.value_set, "valueSet")
    }
}

/// Properties the client can resolve lazily on a completion item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompletionItemResolveSupportCapabilities {
    properties: Option<Vec<String>>,
}

impl CompletionItemResolveSupportCapabilities {
    pub fn new(properties: Vec<String>) -> Self {
        Self {
            properties: Some(properties),
        }
    }

    pub fn properties(&self) -> Option<&[String]> {
        self.properties.as_deref()
    }

    pub fn set_properties(
        &mut self,
        properties: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.properties = Some(require(properties.into(), "properties")?);
        Ok(())
    }
}

impl FromJson for CompletionItemResolveSupportCapabilities {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["properties"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            properties: Some(obj.required("properties")?),
        })
    }
}

impl ToJson for CompletionItemResolveSupportCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("properties", &self.properties);
        out.finish()
    }
}

impl Validate for CompletionItemResolveSupportCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.properties, "properties")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompletionItemInsertTextModeSupportCapabilities {
    value_set: Option<Vec<InsertTextMode>>,
}

impl CompletionItemInsertTextModeSupportCapabilities {
    pub fn new(value_set: Vec<InsertTextMode>) -> Self {
        Self {
            value_set: Some(value_set),
        }
    }

    pub fn value_set(&self) -> Option<&[InsertTextMode]> {
        self.value_set.as_deref()
    }

    pub fn set_value_set(
        &mut self,
        value_set: impl Into<Option<Vec<InsertTextMode>>>,
    ) -> Result<(), ModelError> {
        self.value_set = Some(require(value_set.into(), "valueSet")?);
        Ok(())
    }
}

impl FromJson for CompletionItemInsertTextModeSupportCapabilities {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["valueSet"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            value_set: Some(obj.required("valueSet")?),
        })
    }
}

impl ToJson for CompletionItemInsertTextModeSupportCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("valueSet", &self.value_set);
        out.finish()
    }
}

impl Validate for CompletionItemInsertTextModeSupportCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.value_set, "valueSet")
    }
}

// -------------------------------------------------------------------------
// CompletionItemCapabilities

/// What the client supports on individual completion items. Every member is
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompletionItemCapabilities {
    snippet_support: Option<bool>,
    commit_characters_support: Option<bool>,
    documentation_format: Option<Vec<String>>,
    deprecated_support: Option<bool>,
    preselect_support: Option<bool>,
    tag_support: Option<CompletionItemTagSupportCapabilities>,
    insert_replace_support: Option<bool>,
    resolve_support: Option<CompletionItemResolveSupportCapabilities>,
    insert_text_mode_support: Option<CompletionItemInsertTextModeSupportCapabilities>,
    label_details_support: Option<bool>,
}

impl CompletionItemCapabilities {
    pub fn new(snippet_support: impl Into<Option<bool>>) -> Self {
        Self {
            snippet_support: snippet_support.into(),
            ..Self::default()
        }
    }

    pub fn snippet_support(&self) -> Option<bool> {
        self.snippet_support
    }

    pub fn set_snippet_support(&mut self, value: impl Into<Option<bool>>) {
        self.snippet_support = value.into();
    }

    pub fn commit_characters_support(&self) -> Option<bool> {
        self.commit_characters_support
    }

    pub fn set_commit_characters_support(&mut self, value: impl Into<Option<bool>>) {
        self.commit_characters_support = value.into();
    }

    /// Content formats for the documentation property, in order of
    /// preference. See [`MarkupKind`](super::MarkupKind).
    pub fn documentation_format(&self) -> Option<&[String]> {
        self.documentation_format.as_deref()
    }

    pub fn set_documentation_format(&mut self, value: impl Into<Option<Vec<String>>>) {
        self.documentation_format = value.into();
    }

    pub fn deprecated_support(&self) -> Option<bool> {
        self.deprecated_support
    }

    pub fn set_deprecated_support(&mut self, value: impl Into<Option<bool>>) {
        self.deprecated_support = value.into();
    }

    pub fn preselect_support(&self) -> Option<bool> {
        self.preselect_support
    }

    pub fn set_preselect_support(&mut self, value: impl Into<Option<bool>>) {
        self.preselect_support = value.into();
    }

    pub fn tag_support(&self) -> Option<&CompletionItemTagSupportCapabilities> {
        self.tag_support.as_ref()
    }

    pub fn set_tag_support(
        &mut self,
        value: impl Into<Option<CompletionItemTagSupportCapabilities>>,
    ) {
        self.tag_support = value.into();
    }

    pub fn insert_replace_support(&self) -> Option<bool> {
        self.insert_replace_support
    }

    pub fn set_insert_replace_support(&mut self, value: impl Into<Option<bool>>) {
        self.insert_replace_support = value.into();
    }

    pub fn resolve_support(&self) -> Option<&CompletionItemResolveSupportCapabilities> {
        self.resolve_support.as_ref()
    }

    pub fn set_resolve_support(
        &mut self,
        value: impl Into<Option<CompletionItemResolveSupportCapabilities>>,
    ) {
        self.resolve_support = value.into();
    }

    pub fn insert_text_mode_support(
        &self,
    ) -> Option<&CompletionItemInsertTextModeSupportCapabilities> {
        self.insert_text_mode_support.as_ref()
    }

    pub fn set_insert_text_mode_support(
        &mut self,
        value: impl Into<Option<CompletionItemInsertTextModeSupportCapabilities>>,
    ) {
        self.insert_text_mode_support = value.into();
    }

    pub fn label_details_support(&self) -> Option<bool> {
        self.label_details_support
    }

    pub fn set_label_details_support(&mut self, value: impl Into<Option<bool>>) {
        self.label_details_support = value.into();
    }
}

impl FromJson for CompletionItemCapabilities {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            snippet_support: obj.optional("snippetSupport")?,
            commit_characters_support: obj.optional("commitCharactersSupport")?,
            documentation_format: obj.optional("documentationFormat")?,
            deprecated_support: obj.optional("deprecatedSupport")?,
            preselect_support: obj.optional("preselectSupport")?,
            tag_support: obj.optional("tagSupport")?,
            insert_replace_support: obj.optional("insertReplaceSupport")?,
            resolve_support: obj.optional("resolveSupport")?,
            insert_text_mode_support: obj.optional("insertTextModeSupport")?,
            label_details_support: obj.optional("labelDetailsSupport")?,
        })
    }
}

impl ToJson for CompletionItemCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("snippetSupport", &self.snippet_support)
            .optional("commitCharactersSupport", &self.commit_characters_support)
            .optional("documentationFormat", &self.documentation_format)
            .optional("deprecatedSupport", &self.deprecated_support)
            .optional("preselectSupport", &self.preselect_support)
            .optional("tagSupport", &self.tag_support)
            .optional("insertReplaceSupport", &self.insert_replace_support)
            .optional("resolveSupport", &self.resolve_support)
            .optional("insertTextModeSupport", &self.insert_text_mode_support)
            .optional("labelDetailsSupport", &self.label_details_support);
        out.finish()
    }
}

impl Validate for CompletionItemCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::optional(&self.tag_support, "tagSupport")?;
        validate::optional(&self.resolve_support, "resolveSupport")?;
        validate::optional(&self.insert_text_mode_support, "insertTextModeSupport")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capabilities_round_trip() {
        let value = json!({
            "snippetSupport": true,
            "documentationFormat": ["markdown", "plaintext"],
            "tagSupport": {"valueSet": [1]},
            "resolveSupport": {"properties": ["documentation", "detail"]},
            "insertTextModeSupport": {"valueSet": [1, 2]}
        });
        let caps = CompletionItemCapabilities::from_json(&value).unwrap();
        assert_eq!(caps.snippet_support(), Some(true));
        assert_eq!(
            caps.tag_support().and_then(|t| t.value_set()),
            Some(&[CompletionItemTag::Deprecated][..])
        );
        assert_eq!(
            caps.insert_text_mode_support().and_then(|m| m.value_set()),
            Some(&[InsertTextMode::AsIs, InsertTextMode::AdjustIndentation][..])
        );
        assert_eq!(caps.label_details_support(), None);
        assert_eq!(caps.to_json(), value);
    }

    #[test]
    fn unknown_tag_reports_full_path() {
        let value = json!({"tagSupport": {"valueSet": [1, 7]}});
        let err = CompletionItemCapabilities::from_json(&value).unwrap_err();
        assert_eq!(err.field(), Some("tagSupport.valueSet[1]"));
        assert!(matches!(err, ModelError::InvalidValue { .. }));
    }

    #[test]
    fn nested_required_members_are_validated() {
        let mut caps = CompletionItemCapabilities::new(false);
        caps.set_resolve_support(CompletionItemResolveSupportCapabilities::default());
        assert_eq!(
            caps.validate(),
            Err(ModelError::missing_field("resolveSupport.properties"))
        );
        caps.set_resolve_support(None);
        assert!(caps.validate().is_ok());
        assert_eq!(caps.to_json(), json!({"snippetSupport": false}));
    }
}
