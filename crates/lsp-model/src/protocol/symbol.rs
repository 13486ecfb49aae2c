//! Document symbols: symbol kinds and the related options.

use std::fmt;

use serde_json::Value;

use crate::codec::{FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::groups::{FieldGroup, TextDocumentRegistration, WorkDoneProgressOptions};
use crate::validate::Validate;
use crate::ModelError;

int_enum! {
    pub enum SymbolKind {
        File = 1,
        Module = 2,
        Namespace = 3,
        Package = 4,
        Class = 5,
        Method = 6,
        Property = 7,
        Field = 8,
        Constructor = 9,
        Enum = 10,
        Interface = 11,
        Function = 12,
        Variable = 13,
        Constant = 14,
        String = 15,
        Number = 16,
        Boolean = 17,
        Array = 18,
        Object = 19,
        Key = 20,
        Null = 21,
        EnumMember = 22,
        Struct = 23,
        Event = 24,
        Operator = 25,
        TypeParameter = 26,
    }
}

/// Symbol kinds the client supports. When absent, the client supports
/// `File` through `Array`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SymbolKindCapabilities {
    value_set: Option<Vec<SymbolKind>>,
}

impl SymbolKindCapabilities {
    pub fn new(value_set: impl Into<Option<Vec<SymbolKind>>>) -> Self {
        Self {
            value_set: value_set.into(),
        }
    }

    pub fn value_set(&self) -> Option<&[SymbolKind]> {
        self.value_set.as_deref()
    }

    pub fn set_value_set(&mut self, value_set: impl Into<Option<Vec<SymbolKind>>>) {
        self.value_set = value_set.into();
    }
}

impl FromJson for SymbolKindCapabilities {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            value_set: obj.optional("valueSet")?,
        })
    }
}

impl ToJson for SymbolKindCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("valueSet", &self.value_set);
        out.finish()
    }
}

impl Validate for SymbolKindCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DocumentSymbolRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    label: Option<String>,
}

composes!(DocumentSymbolRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
});

impl DocumentSymbolRegistrationOptions {
    pub fn new(label: impl Into<Option<String>>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Human-readable name shown when several outline providers exist.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<Option<String>>) {
        self.label = label.into();
    }
}

impl fmt::Debug for DocumentSymbolRegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("DocumentSymbolRegistrationOptions");
        self.progress.render(&mut out);
        self.selector.render(&mut out);
        out.field("label", &self.label);
        out.finish()
    }
}

impl FromJson for DocumentSymbolRegistrationOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            selector: TextDocumentRegistration::read(&obj)?,
            label: obj.optional("label")?,
        })
    }
}

impl ToJson for DocumentSymbolRegistrationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.selector.write(&mut out);
        out.optional("label", &self.label);
        out.finish()
    }
}

impl Validate for DocumentSymbolRegistrationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        self.selector.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::HasWorkDoneProgress;
    use serde_json::json;

    #[test]
    fn symbol_kind_bounds() {
        assert_eq!(SymbolKind::try_from(1), Ok(SymbolKind::File));
        assert_eq!(SymbolKind::try_from(26), Ok(SymbolKind::TypeParameter));
        assert!(SymbolKind::try_from(0).is_err());
        assert!(SymbolKind::try_from(27).is_err());
        assert_eq!(SymbolKind::Struct.value(), 23);
    }

    #[test]
    fn value_set_round_trip() {
        let value = json!({"valueSet": [5, 12, 26]});
        let caps = SymbolKindCapabilities::from_json(&value).unwrap();
        assert_eq!(
            caps.value_set(),
            Some(&[SymbolKind::Class, SymbolKind::Function, SymbolKind::TypeParameter][..])
        );
        assert_eq!(caps.to_json(), value);
    }

    #[test]
    fn value_set_rejects_unknown_kinds() {
        let err = SymbolKindCapabilities::from_json(&json!({"valueSet": [1, 99]})).unwrap_err();
        assert_eq!(err.field(), Some("valueSet[1]"));
        assert_eq!(
            err.to_string(),
            "valueSet[1]: 99 is not a valid SymbolKind"
        );
    }

    #[test]
    fn registration_options_equality_includes_groups() {
        let plain = DocumentSymbolRegistrationOptions::new("Outline".to_string());
        let mut with_progress = plain.clone();
        with_progress.set_work_done_progress(true);
        assert_ne!(plain, with_progress);
        assert!(format!("{with_progress:?}").contains("work_done_progress: Some(true)"));
        assert_eq!(
            with_progress.to_json(),
            json!({"workDoneProgress": true, "label": "Outline"})
        );
    }
}
