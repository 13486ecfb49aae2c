//! Optional field groups shared by otherwise unrelated records.
//!
//! Option and parameter records pick the groups they need and embed them as
//! fields. Each group reads, writes and renders its own keys; a record
//! declares `Composes<G>` for every group it embeds and receives the group's
//! accessors through the blanket `Has*` impls below. Groups never look at
//! each other, so any subset can be combined.

use std::fmt;

use crate::codec::{ObjectReader, ObjectWriter};
use crate::guard::require;
use crate::protocol::{DocumentFilter, Position, ProgressToken, TextDocumentIdentifier};
use crate::validate::{self, Validate};
use crate::ModelError;

/// A bundle of fields flattened into the JSON object of a composing record.
pub trait FieldGroup: Default + Validate {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError>;
    fn write(&self, writer: &mut ObjectWriter);
    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>);
}

/// Implemented by records that embed the group `G`.
pub trait Composes<G: FieldGroup> {
    fn group(&self) -> &G;
    fn group_mut(&mut self) -> &mut G;
}

// -------------------------------------------------------------------------
// WorkDoneProgressOptions

/// `workDoneProgress`: the server reports progress for this request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkDoneProgressOptions {
    work_done_progress: Option<bool>,
}

impl FieldGroup for WorkDoneProgressOptions {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            work_done_progress: reader.optional("workDoneProgress")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("workDoneProgress", &self.work_done_progress);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("work_done_progress", &self.work_done_progress);
    }
}

impl Validate for WorkDoneProgressOptions {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

pub trait HasWorkDoneProgress {
    fn work_done_progress(&self) -> Option<bool>;
    fn set_work_done_progress(&mut self, value: impl Into<Option<bool>>);
}

impl<T: Composes<WorkDoneProgressOptions>> HasWorkDoneProgress for T {
    fn work_done_progress(&self) -> Option<bool> {
        self.group().work_done_progress
    }

    fn set_work_done_progress(&mut self, value: impl Into<Option<bool>>) {
        self.group_mut().work_done_progress = value.into();
    }
}

// -------------------------------------------------------------------------
// TextDocumentRegistration

/// `documentSelector`: restricts a registration to matching documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextDocumentRegistration {
    document_selector: Option<Vec<DocumentFilter>>,
}

impl FieldGroup for TextDocumentRegistration {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            document_selector: reader.optional("documentSelector")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("documentSelector", &self.document_selector);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("document_selector", &self.document_selector);
    }
}

impl Validate for TextDocumentRegistration {
    fn validate(&self) -> Result<(), ModelError> {
        validate::optional(&self.document_selector, "documentSelector")
    }
}

pub trait HasDocumentSelector {
    fn document_selector(&self) -> Option<&[DocumentFilter]>;
    fn set_document_selector(&mut self, value: impl Into<Option<Vec<DocumentFilter>>>);
}

impl<T: Composes<TextDocumentRegistration>> HasDocumentSelector for T {
    fn document_selector(&self) -> Option<&[DocumentFilter]> {
        self.group().document_selector.as_deref()
    }

    fn set_document_selector(&mut self, value: impl Into<Option<Vec<DocumentFilter>>>) {
        self.group_mut().document_selector = value.into();
    }
}

// -------------------------------------------------------------------------
// StaticRegistration

/// `id`: lets a statically registered capability be deregistered later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StaticRegistration {
    id: Option<String>,
}

impl FieldGroup for StaticRegistration {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            id: reader.optional("id")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("id", &self.id);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("id", &self.id);
    }
}

impl Validate for StaticRegistration {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

pub trait HasRegistrationId {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, value: impl Into<Option<String>>);
}

impl<T: Composes<StaticRegistration>> HasRegistrationId for T {
    fn id(&self) -> Option<&str> {
        self.group().id.as_deref()
    }

    fn set_id(&mut self, value: impl Into<Option<String>>) {
        self.group_mut().id = value.into();
    }
}

// -------------------------------------------------------------------------
// DynamicRegistration

/// `dynamicRegistration`: the client accepts dynamic registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DynamicRegistration {
    dynamic_registration: Option<bool>,
}

impl FieldGroup for DynamicRegistration {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            dynamic_registration: reader.optional("dynamicRegistration")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("dynamicRegistration", &self.dynamic_registration);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("dynamic_registration", &self.dynamic_registration);
    }
}

impl Validate for DynamicRegistration {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

pub trait HasDynamicRegistration {
    fn dynamic_registration(&self) -> Option<bool>;
    fn set_dynamic_registration(&mut self, value: impl Into<Option<bool>>);
}

impl<T: Composes<DynamicRegistration>> HasDynamicRegistration for T {
    fn dynamic_registration(&self) -> Option<bool> {
        self.group().dynamic_registration
    }

    fn set_dynamic_registration(&mut self, value: impl Into<Option<bool>>) {
        self.group_mut().dynamic_registration = value.into();
    }
}

// -------------------------------------------------------------------------
// WorkDoneProgressParams

/// `workDoneToken`: token the client supplied for progress reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkDoneProgressParams {
    work_done_token: Option<ProgressToken>,
}

impl FieldGroup for WorkDoneProgressParams {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            work_done_token: reader.optional("workDoneToken")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("workDoneToken", &self.work_done_token);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("work_done_token", &self.work_done_token);
    }
}

impl Validate for WorkDoneProgressParams {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

pub trait HasWorkDoneToken {
    fn work_done_token(&self) -> Option<&ProgressToken>;
    fn set_work_done_token(&mut self, value: impl Into<Option<ProgressToken>>);
}

impl<T: Composes<WorkDoneProgressParams>> HasWorkDoneToken for T {
    fn work_done_token(&self) -> Option<&ProgressToken> {
        self.group().work_done_token.as_ref()
    }

    fn set_work_done_token(&mut self, value: impl Into<Option<ProgressToken>>) {
        self.group_mut().work_done_token = value.into();
    }
}

// -------------------------------------------------------------------------
// PartialResultParams

/// `partialResultToken`: token for streaming partial results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PartialResultParams {
    partial_result_token: Option<ProgressToken>,
}

impl FieldGroup for PartialResultParams {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            partial_result_token: reader.optional("partialResultToken")?,
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer.optional("partialResultToken", &self.partial_result_token);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("partial_result_token", &self.partial_result_token);
    }
}

impl Validate for PartialResultParams {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

pub trait HasPartialResultToken {
    fn partial_result_token(&self) -> Option<&ProgressToken>;
    fn set_partial_result_token(&mut self, value: impl Into<Option<ProgressToken>>);
}

impl<T: Composes<PartialResultParams>> HasPartialResultToken for T {
    fn partial_result_token(&self) -> Option<&ProgressToken> {
        self.group().partial_result_token.as_ref()
    }

    fn set_partial_result_token(&mut self, value: impl Into<Option<ProgressToken>>) {
        self.group_mut().partial_result_token = value.into();
    }
}

// -------------------------------------------------------------------------
// TextDocumentPosition

/// `textDocument` + `position`, both required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextDocumentPosition {
    text_document: Option<TextDocumentIdentifier>,
    position: Option<Position>,
}

impl TextDocumentPosition {
    pub fn new(text_document: TextDocumentIdentifier, position: Position) -> Self {
        Self {
            text_document: Some(text_document),
            position: Some(position),
        }
    }
}

impl FieldGroup for TextDocumentPosition {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, ModelError> {
        Ok(Self {
            text_document: Some(reader.required("textDocument")?),
            position: Some(reader.required("position")?),
        })
    }

    fn write(&self, writer: &mut ObjectWriter) {
        writer
            .optional("textDocument", &self.text_document)
            .optional("position", &self.position);
    }

    fn render(&self, out: &mut fmt::DebugStruct<'_, '_>) {
        out.field("text_document", &self.text_document)
            .field("position", &self.position);
    }
}

impl Validate for TextDocumentPosition {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.text_document, "textDocument")?;
        validate::required(&self.position, "position")
    }
}

pub trait HasTextDocumentPosition {
    fn text_document(&self) -> Option<&TextDocumentIdentifier>;
    fn set_text_document(
        &mut self,
        value: impl Into<Option<TextDocumentIdentifier>>,
    ) -> Result<(), ModelError>;
    fn position(&self) -> Option<&Position>;
    fn set_position(&mut self, value: impl Into<Option<Position>>) -> Result<(), ModelError>;
}

impl<T: Composes<TextDocumentPosition>> HasTextDocumentPosition for T {
    fn text_document(&self) -> Option<&TextDocumentIdentifier> {
        self.group().text_document.as_ref()
    }

    fn set_text_document(
        &mut self,
        value: impl Into<Option<TextDocumentIdentifier>>,
    ) -> Result<(), ModelError> {
        self.group_mut().text_document = Some(require(value.into(), "textDocument")?);
        Ok(())
    }

    fn position(&self) -> Option<&Position> {
        self.group().position.as_ref()
    }

    fn set_position(&mut self, value: impl Into<Option<Position>>) -> Result<(), ModelError> {
        self.group_mut().position = Some(require(value.into(), "position")?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ToJson;
    use serde_json::{json, Value};

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        progress: WorkDoneProgressOptions,
        registration: StaticRegistration,
    }

    impl Composes<WorkDoneProgressOptions> for Probe {
        fn group(&self) -> &WorkDoneProgressOptions {
            &self.progress
        }
        fn group_mut(&mut self) -> &mut WorkDoneProgressOptions {
            &mut self.progress
        }
    }

    impl Composes<StaticRegistration> for Probe {
        fn group(&self) -> &StaticRegistration {
            &self.registration
        }
        fn group_mut(&mut self) -> &mut StaticRegistration {
            &mut self.registration
        }
    }

    #[test]
    fn groups_are_independent() {
        let mut probe = Probe::default();
        probe.set_work_done_progress(true);
        assert_eq!(probe.id(), None);
        probe.set_id("reg-1".to_string());
        assert_eq!(probe.work_done_progress(), Some(true));
        assert_eq!(probe.id(), Some("reg-1"));
        probe.set_work_done_progress(None);
        assert_eq!(probe.id(), Some("reg-1"));
    }

    #[test]
    fn group_reads_and_writes_its_own_keys() {
        let value = json!({"workDoneToken": 7, "other": "ignored"});
        let reader = ObjectReader::new(&value).unwrap();
        let group = WorkDoneProgressParams::read(&reader).unwrap();
        assert_eq!(group.work_done_token, Some(ProgressToken::Right(7)));
        let mut writer = ObjectWriter::new();
        group.write(&mut writer);
        assert_eq!(writer.finish(), json!({"workDoneToken": 7}));
    }

    #[test]
    fn position_group_requires_both_fields() {
        let value = json!({"textDocument": {"uri": "file:///a"}});
        let reader = ObjectReader::new(&value).unwrap();
        assert_eq!(
            TextDocumentPosition::read(&reader).unwrap_err(),
            ModelError::missing_field("position")
        );
        assert_eq!(
            TextDocumentPosition::default().validate(),
            Err(ModelError::missing_field("textDocument"))
        );
    }

    #[test]
    fn document_selector_round_trip() {
        let value = json!({"documentSelector": [{"language": "rust"}]});
        let reader = ObjectReader::new(&value).unwrap();
        let group = TextDocumentRegistration::read(&reader).unwrap();
        let selector = group.document_selector.clone().unwrap_or_default();
        assert_eq!(selector[0].language(), Some("rust"));
        assert_eq!(selector.to_json(), json!([{"language": "rust"}]));
        let mut writer = ObjectWriter::new();
        group.write(&mut writer);
        assert_eq!(writer.finish(), value);
        let empty: Value = ObjectWriter::new().finish();
        assert_eq!(empty, json!({}));
    }
}
