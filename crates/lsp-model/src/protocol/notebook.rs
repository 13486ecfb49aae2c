//! Notebook document synchronisation options and selectors.

use std::fmt;

use lsp_model_either::Either;
use serde_json::Value;

use crate::codec::{has_keys, FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::groups::{FieldGroup, StaticRegistration};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

// -------------------------------------------------------------------------
// NotebookDocumentFilter

/// Matches notebooks by type, URI scheme or glob pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookDocumentFilter {
    notebook_type: Option<String>,
    scheme: Option<String>,
    pattern: Option<String>,
}

impl NotebookDocumentFilter {
    pub fn new(
        notebook_type: impl Into<Option<String>>,
        scheme: impl Into<Option<String>>,
        pattern: impl Into<Option<String>>,
    ) -> Self {
        Self {
            notebook_type: notebook_type.into(),
            scheme: scheme.into(),
            pattern: pattern.into(),
        }
    }

    pub fn notebook_type(&self) -> Option<&str> {
        self.notebook_type.as_deref()
    }

    pub fn set_notebook_type(&mut self, value: impl Into<Option<String>>) {
        self.notebook_type = value.into();
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, value: impl Into<Option<String>>) {
        self.scheme = value.into();
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn set_pattern(&mut self, value: impl Into<Option<String>>) {
        self.pattern = value.into();
    }
}

impl FromJson for NotebookDocumentFilter {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            notebook_type: obj.optional("notebookType")?,
            scheme: obj.optional("scheme")?,
            pattern: obj.optional("pattern")?,
        })
    }
}

impl ToJson for NotebookDocumentFilter {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("notebookType", &self.notebook_type)
            .optional("scheme", &self.scheme)
            .optional("pattern", &self.pattern);
        out.finish()
    }
}

impl Validate for NotebookDocumentFilter {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// -------------------------------------------------------------------------
// NotebookSelectorCell

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookSelectorCell {
    language: Option<String>,
}

impl NotebookSelectorCell {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.language = Some(require(language.into(), "language")?);
        Ok(())
    }
}

impl FromJson for NotebookSelectorCell {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["language"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            language: Some(obj.required("language")?),
        })
    }
}

impl ToJson for NotebookSelectorCell {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("language", &self.language);
        out.finish()
    }
}

impl Validate for NotebookSelectorCell {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.language, "language")
    }
}

// -------------------------------------------------------------------------
// NotebookSelector

/// Selects notebooks (by notebook type string or filter) and, optionally,
/// the cells within them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookSelector {
    notebook: Option<Either<String, NotebookDocumentFilter>>,
    cells: Option<Vec<NotebookSelectorCell>>,
}

impl NotebookSelector {
    pub fn new(
        notebook: impl Into<Option<Either<String, NotebookDocumentFilter>>>,
        cells: impl Into<Option<Vec<NotebookSelectorCell>>>,
    ) -> Self {
        Self {
            notebook: notebook.into(),
            cells: cells.into(),
        }
    }

    pub fn notebook(&self) -> Option<&Either<String, NotebookDocumentFilter>> {
        self.notebook.as_ref()
    }

    pub fn set_notebook(
        &mut self,
        value: impl Into<Option<Either<String, NotebookDocumentFilter>>>,
    ) {
        self.notebook = value.into();
    }

    pub fn cells(&self) -> Option<&[NotebookSelectorCell]> {
        self.cells.as_deref()
    }

    pub fn set_cells(&mut self, value: impl Into<Option<Vec<NotebookSelectorCell>>>) {
        self.cells = value.into();
    }
}

impl FromJson for NotebookSelector {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            notebook: obj.optional("notebook")?,
            cells: obj.optional("cells")?,
        })
    }
}

impl ToJson for NotebookSelector {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("notebook", &self.notebook)
            .optional("cells", &self.cells);
        out.finish()
    }
}

impl Validate for NotebookSelector {
    fn validate(&self) -> Result<(), ModelError> {
        validate::optional(&self.cells, "cells")
    }
}

// -------------------------------------------------------------------------
// NotebookDocumentSyncRegistrationOptions

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookDocumentSyncRegistrationOptions {
    registration: StaticRegistration,
    notebook_selector: Option<Vec<NotebookSelector>>,
    save: Option<bool>,
}

composes!(NotebookDocumentSyncRegistrationOptions {
    registration: StaticRegistration,
});

impl NotebookDocumentSyncRegistrationOptions {
    pub fn new(notebook_selector: Vec<NotebookSelector>) -> Self {
        Self {
            notebook_selector: Some(notebook_selector),
            ..Self::default()
        }
    }

    pub fn notebook_selector(&self) -> Option<&[NotebookSelector]> {
        self.notebook_selector.as_deref()
    }

    pub fn set_notebook_selector(
        &mut self,
        value: impl Into<Option<Vec<NotebookSelector>>>,
    ) -> Result<(), ModelError> {
        self.notebook_selector = Some(require(value.into(), "notebookSelector")?);
        Ok(())
    }

    /// Whether save notifications are forwarded to the server.
    pub fn save(&self) -> Option<bool> {
        self.save
    }

    pub fn set_save(&mut self, value: impl Into<Option<bool>>) {
        self.save = value.into();
    }
}

impl fmt::Debug for NotebookDocumentSyncRegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("NotebookDocumentSyncRegistrationOptions");
        self.registration.render(&mut out);
        out.field("notebook_selector", &self.notebook_selector)
            .field("save", &self.save);
        out.finish()
    }
}

impl FromJson for NotebookDocumentSyncRegistrationOptions {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["notebookSelector"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            registration: StaticRegistration::read(&obj)?,
            notebook_selector: Some(obj.required("notebookSelector")?),
            save: obj.optional("save")?,
        })
    }
}

impl ToJson for NotebookDocumentSyncRegistrationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.registration.write(&mut out);
        out.optional("notebookSelector", &self.notebook_selector)
            .optional("save", &self.save);
        out.finish()
    }
}

impl Validate for NotebookDocumentSyncRegistrationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.notebook_selector, "notebookSelector")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::HasRegistrationId;
    use serde_json::json;

    #[test]
    fn notebook_field_discriminates_string_and_filter() {
        let value = json!({
            "id": "nb-sync",
            "notebookSelector": [
                {"notebook": "jupyter-notebook", "cells": [{"language": "python"}]},
                {"notebook": {"notebookType": "jupyter-notebook", "scheme": "untitled"}}
            ],
            "save": true
        });
        let options = NotebookDocumentSyncRegistrationOptions::from_json(&value).unwrap();
        assert_eq!(options.id(), Some("nb-sync"));
        let selectors = options.notebook_selector().unwrap();
        assert_eq!(
            selectors[0].notebook(),
            Some(&Either::Left("jupyter-notebook".to_string()))
        );
        let filter = selectors[1].notebook().and_then(Either::right).unwrap();
        assert_eq!(filter.scheme(), Some("untitled"));
        assert_eq!(options.to_json(), value);
    }

    #[test]
    fn cell_language_is_required() {
        let value = json!({"notebookSelector": [{"cells": [{}]}]});
        assert_eq!(
            NotebookDocumentSyncRegistrationOptions::from_json(&value).unwrap_err(),
            ModelError::missing_field("notebookSelector[0].cells[0].language")
        );
    }

    #[test]
    fn notebook_field_rejects_numbers() {
        let err = NotebookSelector::from_json(&json!({"notebook": 3})).unwrap_err();
        assert_eq!(err.field(), Some("notebook"));
        assert!(matches!(err, ModelError::UnrecognizedShape { .. }));
    }

    #[test]
    fn debug_lists_registration_id_first() {
        let mut options = NotebookDocumentSyncRegistrationOptions::new(vec![]);
        options.set_id("x".to_string());
        let rendered = format!("{options:?}");
        assert!(rendered.starts_with("NotebookDocumentSyncRegistrationOptions { id: Some(\"x\")"));
    }
}
