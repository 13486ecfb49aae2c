//! Signature help: registration options and client capabilities.

use std::fmt;

use serde_json::Value;

use crate::codec::{FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::groups::{FieldGroup, TextDocumentRegistration, WorkDoneProgressOptions};
use crate::validate::{self, Validate};
use crate::ModelError;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SignatureHelpRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    trigger_characters: Option<Vec<String>>,
    retrigger_characters: Option<Vec<String>>,
}

composes!(SignatureHelpRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
});

impl SignatureHelpRegistrationOptions {
    pub fn new(
        trigger_characters: impl Into<Option<Vec<String>>>,
        retrigger_characters: impl Into<Option<Vec<String>>>,
    ) -> Self {
        Self {
            trigger_characters: trigger_characters.into(),
            retrigger_characters: retrigger_characters.into(),
            ..Self::default()
        }
    }

    /// Characters that trigger signature help automatically.
    pub fn trigger_characters(&self) -> Option<&[String]> {
        self.trigger_characters.as_deref()
    }

    pub fn set_trigger_characters(&mut self, value: impl Into<Option<Vec<String>>>) {
        self.trigger_characters = value.into();
    }

    /// Characters that re-trigger signature help while it is already
    /// showing.
    pub fn retrigger_characters(&self) -> Option<&[String]> {
        self.retrigger_characters.as_deref()
    }

    pub fn set_retrigger_characters(&mut self, value: impl Into<Option<Vec<String>>>) {
        self.retrigger_characters = value.into();
    }
}

impl fmt::Debug for SignatureHelpRegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SignatureHelpRegistrationOptions");
        self.progress.render(&mut out);
        self.selector.render(&mut out);
        out.field("trigger_characters", &self.trigger_characters)
            .field("retrigger_characters", &self.retrigger_characters);
        out.finish()
    }
}

impl FromJson for SignatureHelpRegistrationOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            selector: TextDocumentRegistration::read(&obj)?,
            trigger_characters: obj.optional("triggerCharacters")?,
            retrigger_characters: obj.optional("retriggerCharacters")?,
        })
    }
}

impl ToJson for SignatureHelpRegistrationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.selector.write(&mut out);
        out.optional("triggerCharacters", &self.trigger_characters)
            .optional("retriggerCharacters", &self.retrigger_characters);
        out.finish()
    }
}

impl Validate for SignatureHelpRegistrationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        self.selector.validate()
    }
}

// -------------------------------------------------------------------------
// Client capabilities

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParameterInformationCapabilities {
    label_offset_support: Option<bool>,
}

impl ParameterInformationCapabilities {
    pub fn new(label_offset_support: impl Into<Option<bool>>) -> Self {
        Self {
            label_offset_support: label_offset_support.into(),
        }
    }

    /// Whether parameter labels may be `[start, end]` offsets into the
    /// signature label.
    pub fn label_offset_support(&self) -> Option<bool> {
        self.label_offset_support
    }

    pub fn set_label_offset_support(&mut self, value: impl Into<Option<bool>>) {
        self.label_offset_support = value.into();
    }
}

impl FromJson for ParameterInformationCapabilities {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            label_offset_support: obj.optional("labelOffsetSupport")?,
        })
    }
}

impl ToJson for ParameterInformationCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("labelOffsetSupport", &self.label_offset_support);
        out.finish()
    }
}

impl Validate for ParameterInformationCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SignatureInformationCapabilities {
    documentation_format: Option<Vec<String>>,
    parameter_information: Option<ParameterInformationCapabilities>,
    active_parameter_support: Option<bool>,
}

impl SignatureInformationCapabilities {
    pub fn new(documentation_format: impl Into<Option<Vec<String>>>) -> Self {
        Self {
            documentation_format: documentation_format.into(),
            ..Self::default()
        }
    }

    pub fn documentation_format(&self) -> Option<&[String]> {
        self.documentation_format.as_deref()
    }

    pub fn set_documentation_format(&mut self, value: impl Into<Option<Vec<String>>>) {
        self.documentation_format = value.into();
    }

    pub fn parameter_information(&self) -> Option<&ParameterInformationCapabilities> {
        self.parameter_information.as_ref()
    }

    pub fn set_parameter_information(
        &mut self,
        value: impl Into<Option<ParameterInformationCapabilities>>,
    ) {
        self.parameter_information = value.into();
    }

    pub fn active_parameter_support(&self) -> Option<bool> {
        self.active_parameter_support
    }

    pub fn set_active_parameter_support(&mut self, value: impl Into<Option<bool>>) {
        self.active_parameter_support = value.into();
    }
}

impl FromJson for SignatureInformationCapabilities {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            documentation_format: obj.optional("documentationFormat")?,
            parameter_information: obj.optional("parameterInformation")?,
            active_parameter_support: obj.optional("activeParameterSupport")?,
        })
    }
}

impl ToJson for SignatureInformationCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("documentationFormat", &self.documentation_format)
            .optional("parameterInformation", &self.parameter_information)
            .optional("activeParameterSupport", &self.active_parameter_support);
        out.finish()
    }
}

impl Validate for SignatureInformationCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::optional(&self.parameter_information, "parameterInformation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{HasDocumentSelector, HasWorkDoneProgress};
    use crate::protocol::DocumentFilter;
    use serde_json::json;

    #[test]
    fn registration_options_combine_both_groups() {
        let mut options = SignatureHelpRegistrationOptions::new(vec!["(".to_string()], None);
        options.set_work_done_progress(false);
        options.set_document_selector(vec![DocumentFilter::for_language("go")]);
        let value = options.to_json();
        assert_eq!(
            value,
            json!({
                "workDoneProgress": false,
                "documentSelector": [{"language": "go"}],
                "triggerCharacters": ["("]
            })
        );
        assert_eq!(SignatureHelpRegistrationOptions::from_json(&value).unwrap(), options);
    }

    #[test]
    fn clearing_a_group_field_leaves_the_rest() {
        let mut options = SignatureHelpRegistrationOptions::new(None, vec![",".to_string()]);
        options.set_work_done_progress(true);
        options.set_document_selector(None);
        assert_eq!(options.work_done_progress(), Some(true));
        assert_eq!(options.document_selector(), None);
        assert_eq!(options.retrigger_characters(), Some(&[",".to_string()][..]));
    }

    #[test]
    fn signature_information_nests_parameter_capabilities() {
        let value = json!({
            "documentationFormat": ["markdown"],
            "parameterInformation": {"labelOffsetSupport": true},
            "activeParameterSupport": true
        });
        let caps = SignatureInformationCapabilities::from_json(&value).unwrap();
        assert_eq!(
            caps.parameter_information().and_then(|p| p.label_offset_support()),
            Some(true)
        );
        assert_eq!(caps.to_json(), value);
    }
}
