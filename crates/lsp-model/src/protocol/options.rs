//! Small option and capability records built mostly from field groups.

use std::fmt;

use serde_json::Value;

use crate::codec::{FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::groups::{
    DynamicRegistration, FieldGroup, HasDynamicRegistration, TextDocumentRegistration,
    WorkDoneProgressOptions,
};
use crate::validate::Validate;
use crate::ModelError;

// -------------------------------------------------------------------------
// CodeLensOptions

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeLensOptions {
    progress: WorkDoneProgressOptions,
    resolve_provider: Option<bool>,
}

composes!(CodeLensOptions {
    progress: WorkDoneProgressOptions,
});

impl CodeLensOptions {
    pub fn new(resolve_provider: impl Into<Option<bool>>) -> Self {
        Self {
            resolve_provider: resolve_provider.into(),
            ..Self::default()
        }
    }

    pub fn resolve_provider(&self) -> Option<bool> {
        self.resolve_provider
    }

    pub fn set_resolve_provider(&mut self, value: impl Into<Option<bool>>) {
        self.resolve_provider = value.into();
    }
}

impl fmt::Debug for CodeLensOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("CodeLensOptions");
        self.progress.render(&mut out);
        out.field("resolve_provider", &self.resolve_provider);
        out.finish()
    }
}

impl FromJson for CodeLensOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            resolve_provider: obj.optional("resolveProvider")?,
        })
    }
}

impl ToJson for CodeLensOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        out.optional("resolveProvider", &self.resolve_provider);
        out.finish()
    }
}

impl Validate for CodeLensOptions {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// -------------------------------------------------------------------------
// CodeActionRegistrationOptions

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeActionRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    code_action_kinds: Option<Vec<String>>,
    resolve_provider: Option<bool>,
}

composes!(CodeActionRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
});

impl CodeActionRegistrationOptions {
    pub fn new(code_action_kinds: impl Into<Option<Vec<String>>>) -> Self {
        Self {
            code_action_kinds: code_action_kinds.into(),
            ..Self::default()
        }
    }

    /// Kinds of code action the server may return, e.g. `quickfix`.
    pub fn code_action_kinds(&self) -> Option<&[String]> {
        self.code_action_kinds.as_deref()
    }

    pub fn set_code_action_kinds(&mut self, value: impl Into<Option<Vec<String>>>) {
        self.code_action_kinds = value.into();
    }

    pub fn resolve_provider(&self) -> Option<bool> {
        self.resolve_provider
    }

    pub fn set_resolve_provider(&mut self, value: impl Into<Option<bool>>) {
        self.resolve_provider = value.into();
    }
}

impl fmt::Debug for CodeActionRegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("CodeActionRegistrationOptions");
        self.progress.render(&mut out);
        self.selector.render(&mut out);
        out.field("code_action_kinds", &self.code_action_kinds)
            .field("resolve_provider", &self.resolve_provider);
        out.finish()
    }
}

impl FromJson for CodeActionRegistrationOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            selector: TextDocumentRegistration::read(&obj)?,
            code_action_kinds: obj.optional("codeActionKinds")?,
            resolve_provider: obj.optional("resolveProvider")?,
        })
    }
}

impl ToJson for CodeActionRegistrationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.selector.write(&mut out);
        out.optional("codeActionKinds", &self.code_action_kinds)
            .optional("resolveProvider", &self.resolve_provider);
        out.finish()
    }
}

impl Validate for CodeActionRegistrationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        self.selector.validate()
    }
}

// -------------------------------------------------------------------------
// RenameOptions

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RenameOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    prepare_provider: Option<bool>,
}

composes!(RenameOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
});

impl RenameOptions {
    pub fn new(prepare_provider: impl Into<Option<bool>>) -> Self {
        Self {
            prepare_provider: prepare_provider.into(),
            ..Self::default()
        }
    }

    /// Whether the server answers `textDocument/prepareRename`.
    pub fn prepare_provider(&self) -> Option<bool> {
        self.prepare_provider
    }

    pub fn set_prepare_provider(&mut self, value: impl Into<Option<bool>>) {
        self.prepare_provider = value.into();
    }
}

impl fmt::Debug for RenameOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("RenameOptions");
        self.progress.render(&mut out);
        self.selector.render(&mut out);
        out.field("prepare_provider", &self.prepare_provider);
        out.finish()
    }
}

impl FromJson for RenameOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            selector: TextDocumentRegistration::read(&obj)?,
            prepare_provider: obj.optional("prepareProvider")?,
        })
    }
}

impl ToJson for RenameOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.selector.write(&mut out);
        out.optional("prepareProvider", &self.prepare_provider);
        out.finish()
    }
}

impl Validate for RenameOptions {
    fn validate(&self) -> Result<(), ModelError> {
        self.selector.validate()
    }
}

// -------------------------------------------------------------------------
// LinkedEditingRangeCapabilities

/// Client capability with no members beyond `dynamicRegistration`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LinkedEditingRangeCapabilities {
    dynamic: DynamicRegistration,
}

composes!(LinkedEditingRangeCapabilities {
    dynamic: DynamicRegistration,
});

impl LinkedEditingRangeCapabilities {
    pub fn new(dynamic_registration: impl Into<Option<bool>>) -> Self {
        let mut caps = Self::default();
        caps.set_dynamic_registration(dynamic_registration);
        caps
    }
}

impl fmt::Debug for LinkedEditingRangeCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("LinkedEditingRangeCapabilities");
        self.dynamic.render(&mut out);
        out.finish()
    }
}

impl FromJson for LinkedEditingRangeCapabilities {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            dynamic: DynamicRegistration::read(&obj)?,
        })
    }
}

impl ToJson for LinkedEditingRangeCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.dynamic.write(&mut out);
        out.finish()
    }
}

impl Validate for LinkedEditingRangeCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{HasDocumentSelector, HasWorkDoneProgress};
    use crate::protocol::DocumentFilter;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn code_lens_carries_only_progress_group() {
        let value =
            json!({"workDoneProgress": true, "resolveProvider": false, "documentSelector": []});
        let options = CodeLensOptions::from_json(&value).unwrap();
        assert_eq!(options.work_done_progress(), Some(true));
        assert_eq!(options.resolve_provider(), Some(false));
        assert_eq!(
            options.to_json(),
            json!({"workDoneProgress": true, "resolveProvider": false})
        );
    }

    #[test]
    fn code_action_options_round_trip() {
        let mut options = CodeActionRegistrationOptions::new(vec!["quickfix".to_string()]);
        options.set_document_selector(vec![DocumentFilter::new(None, "file".to_string(), None)]);
        options.set_resolve_provider(true);
        let value = options.to_json();
        assert_eq!(
            value,
            json!({
                "documentSelector": [{"scheme": "file"}],
                "codeActionKinds": ["quickfix"],
                "resolveProvider": true
            })
        );
        assert_eq!(CodeActionRegistrationOptions::from_json(&value).unwrap(), options);
    }

    #[test]
    fn group_fields_participate_in_hash() {
        let a = RenameOptions::new(true);
        let mut b = RenameOptions::new(true);
        assert_eq!(hash_of(&a), hash_of(&b));
        b.set_work_done_progress(true);
        assert_ne!(a, b);
        b.set_work_done_progress(None);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn linked_editing_is_just_dynamic_registration() {
        let caps = LinkedEditingRangeCapabilities::new(true);
        assert_eq!(caps.dynamic_registration(), Some(true));
        assert_eq!(caps.to_json(), json!({"dynamicRegistration": true}));
        assert_eq!(
            format!("{caps:?}"),
            "LinkedEditingRangeCapabilities { dynamic_registration: Some(true) }"
        );
        assert_eq!(
            LinkedEditingRangeCapabilities::from_json(&json!({})).unwrap(),
            LinkedEditingRangeCapabilities::default()
        );
    }
}
