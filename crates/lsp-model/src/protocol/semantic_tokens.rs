//! Semantic tokens: server options, client capabilities, request and result.

use std::fmt;

use lsp_model_either::Either;
use serde_json::Value;

use super::TextDocumentIdentifier;
use crate::codec::{has_keys, FromJson, LspObject, ObjectReader, ObjectWriter, ToJson};
use crate::groups::{
    DynamicRegistration, FieldGroup, PartialResultParams, StaticRegistration,
    TextDocumentRegistration, WorkDoneProgressOptions, WorkDoneProgressParams,
};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// Token encodings a client may support.
pub struct TokenFormat;

impl TokenFormat {
    pub const RELATIVE: &'static str = "relative";
}

// -------------------------------------------------------------------------
// SemanticTokensLegend

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensLegend {
    token_types: Option<Vec<String>>,
    token_modifiers: Option<Vec<String>>,
}

impl SemanticTokensLegend {
    pub fn new(token_types: Vec<String>, token_modifiers: Vec<String>) -> Self {
        Self {
            token_types: Some(token_types),
            token_modifiers: Some(token_modifiers),
        }
    }

    pub fn token_types(&self) -> Option<&[String]> {
        self.token_types.as_deref()
    }

    pub fn set_token_types(
        &mut self,
        token_types: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.token_types = Some(require(token_types.into(), "tokenTypes")?);
        Ok(())
    }

    pub fn token_modifiers(&self) -> Option<&[String]> {
        self.token_modifiers.as_deref()
    }

    pub fn set_token_modifiers(
        &mut self,
        token_modifiers: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.token_modifiers = Some(require(token_modifiers.into(), "tokenModifiers")?);
        Ok(())
    }
}

impl FromJson for SemanticTokensLegend {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["tokenTypes", "tokenModifiers"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            token_types: Some(obj.required("tokenTypes")?),
            token_modifiers: Some(obj.required("tokenModifiers")?),
        })
    }
}

impl ToJson for SemanticTokensLegend {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("tokenTypes", &self.token_types)
            .optional("tokenModifiers", &self.token_modifiers);
        out.finish()
    }
}

impl Validate for SemanticTokensLegend {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.token_types, "tokenTypes")?;
        validate::required(&self.token_modifiers, "tokenModifiers")
    }
}

// -------------------------------------------------------------------------
// SemanticTokensServerFull

/// Server-side `full` option; `delta` advertises delta support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensServerFull {
    delta: Option<bool>,
}

impl SemanticTokensServerFull {
    pub fn new(delta: impl Into<Option<bool>>) -> Self {
        Self {
            delta: delta.into(),
        }
    }

    pub fn delta(&self) -> Option<bool> {
        self.delta
    }

    pub fn set_delta(&mut self, delta: impl Into<Option<bool>>) {
        self.delta = delta.into();
    }
}

impl FromJson for SemanticTokensServerFull {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            delta: obj.optional("delta")?,
        })
    }
}

impl ToJson for SemanticTokensServerFull {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("delta", &self.delta);
        out.finish()
    }
}

impl Validate for SemanticTokensServerFull {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// -------------------------------------------------------------------------
// SemanticTokensWithRegistrationOptions

/// Server capability for semantic tokens, registrable statically or
/// dynamically.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensWithRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    legend: Option<SemanticTokensLegend>,
    range: Option<Either<bool, LspObject>>,
    full: Option<Either<bool, SemanticTokensServerFull>>,
    registration: StaticRegistration,
}

composes!(SemanticTokensWithRegistrationOptions {
    progress: WorkDoneProgressOptions,
    selector: TextDocumentRegistration,
    registration: StaticRegistration,
});

impl SemanticTokensWithRegistrationOptions {
    pub fn new(legend: SemanticTokensLegend) -> Self {
        Self {
            legend: Some(legend),
            ..Self::default()
        }
    }

    pub fn with_full(
        legend: SemanticTokensLegend,
        full: Either<bool, SemanticTokensServerFull>,
    ) -> Self {
        Self {
            legend: Some(legend),
            full: Some(full),
            ..Self::default()
        }
    }

    pub fn legend(&self) -> Option<&SemanticTokensLegend> {
        self.legend.as_ref()
    }

    pub fn set_legend(
        &mut self,
        legend: impl Into<Option<SemanticTokensLegend>>,
    ) -> Result<(), ModelError> {
        self.legend = Some(require(legend.into(), "legend")?);
        Ok(())
    }

    pub fn range(&self) -> Option<&Either<bool, LspObject>> {
        self.range.as_ref()
    }

    pub fn set_range(&mut self, range: impl Into<Option<Either<bool, LspObject>>>) {
        self.range = range.into();
    }

    pub fn full(&self) -> Option<&Either<bool, SemanticTokensServerFull>> {
        self.full.as_ref()
    }

    pub fn set_full(&mut self, full: impl Into<Option<Either<bool, SemanticTokensServerFull>>>) {
        self.full = full.into();
    }
}

impl fmt::Debug for SemanticTokensWithRegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SemanticTokensWithRegistrationOptions");
        self.progress.render(&mut out);
        self.selector.render(&mut out);
        out.field("legend", &self.legend)
            .field("range", &self.range)
            .field("full", &self.full);
        self.registration.render(&mut out);
        out.finish()
    }
}

impl FromJson for SemanticTokensWithRegistrationOptions {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["legend"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressOptions::read(&obj)?,
            selector: TextDocumentRegistration::read(&obj)?,
            legend: Some(obj.required("legend")?),
            range: obj.optional("range")?,
            full: obj.optional("full")?,
            registration: StaticRegistration::read(&obj)?,
        })
    }
}

impl ToJson for SemanticTokensWithRegistrationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.selector.write(&mut out);
        out.optional("legend", &self.legend)
            .optional("range", &self.range)
            .optional("full", &self.full);
        self.registration.write(&mut out);
        out.finish()
    }
}

impl Validate for SemanticTokensWithRegistrationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        self.selector.validate()?;
        validate::required(&self.legend, "legend")?;
        validate::optional(&self.full, "full")
    }
}

// -------------------------------------------------------------------------
// SemanticTokensPartialResult

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensPartialResult {
    data: Option<Vec<u32>>,
}

impl SemanticTokensPartialResult {
    pub fn new(data: Vec<u32>) -> Self {
        Self { data: Some(data) }
    }

    pub fn data(&self) -> Option<&[u32]> {
        self.data.as_deref()
    }

    pub fn set_data(&mut self, data: impl Into<Option<Vec<u32>>>) -> Result<(), ModelError> {
        self.data = Some(require(data.into(), "data")?);
        Ok(())
    }
}

impl FromJson for SemanticTokensPartialResult {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["data"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            data: Some(obj.required("data")?),
        })
    }
}

impl ToJson for SemanticTokensPartialResult {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("data", &self.data);
        out.finish()
    }
}

impl Validate for SemanticTokensPartialResult {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.data, "data")
    }
}

// -------------------------------------------------------------------------
// Client capabilities

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensClientCapabilitiesRequestsFull {
    delta: Option<bool>,
}

impl SemanticTokensClientCapabilitiesRequestsFull {
    pub fn new(delta: impl Into<Option<bool>>) -> Self {
        Self {
            delta: delta.into(),
        }
    }

    pub fn delta(&self) -> Option<bool> {
        self.delta
    }

    pub fn set_delta(&mut self, delta: impl Into<Option<bool>>) {
        self.delta = delta.into();
    }
}

impl FromJson for SemanticTokensClientCapabilitiesRequestsFull {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            delta: obj.optional("delta")?,
        })
    }
}

impl ToJson for SemanticTokensClientCapabilitiesRequestsFull {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("delta", &self.delta);
        out.finish()
    }
}

impl Validate for SemanticTokensClientCapabilitiesRequestsFull {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

/// Which semantic token requests the client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensClientCapabilitiesRequests {
    range: Option<Either<bool, LspObject>>,
    full: Option<Either<bool, SemanticTokensClientCapabilitiesRequestsFull>>,
}

impl SemanticTokensClientCapabilitiesRequests {
    pub fn new(
        range: impl Into<Option<Either<bool, LspObject>>>,
        full: impl Into<Option<Either<bool, SemanticTokensClientCapabilitiesRequestsFull>>>,
    ) -> Self {
        Self {
            range: range.into(),
            full: full.into(),
        }
    }

    pub fn range(&self) -> Option<&Either<bool, LspObject>> {
        self.range.as_ref()
    }

    pub fn set_range(&mut self, range: impl Into<Option<Either<bool, LspObject>>>) {
        self.range = range.into();
    }

    pub fn full(&self) -> Option<&Either<bool, SemanticTokensClientCapabilitiesRequestsFull>> {
        self.full.as_ref()
    }

    pub fn set_full(
        &mut self,
        full: impl Into<Option<Either<bool, SemanticTokensClientCapabilitiesRequestsFull>>>,
    ) {
        self.full = full.into();
    }
}

impl FromJson for SemanticTokensClientCapabilitiesRequests {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            range: obj.optional("range")?,
            full: obj.optional("full")?,
        })
    }
}

impl ToJson for SemanticTokensClientCapabilitiesRequests {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("range", &self.range).optional("full", &self.full);
        out.finish()
    }
}

impl Validate for SemanticTokensClientCapabilitiesRequests {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

/// Client capabilities for semantic tokens.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensCapabilities {
    dynamic: DynamicRegistration,
    requests: Option<SemanticTokensClientCapabilitiesRequests>,
    token_types: Option<Vec<String>>,
    token_modifiers: Option<Vec<String>>,
    formats: Option<Vec<String>>,
    overlapping_token_support: Option<bool>,
    multiline_token_support: Option<bool>,
    server_cancel_support: Option<bool>,
    augments_syntax_tokens: Option<bool>,
}

composes!(SemanticTokensCapabilities { dynamic: DynamicRegistration });

impl SemanticTokensCapabilities {
    pub fn new(
        requests: SemanticTokensClientCapabilitiesRequests,
        token_types: Vec<String>,
        token_modifiers: Vec<String>,
        formats: Vec<String>,
    ) -> Self {
        Self {
            requests: Some(requests),
            token_types: Some(token_types),
            token_modifiers: Some(token_modifiers),
            formats: Some(formats),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Option<&SemanticTokensClientCapabilitiesRequests> {
        self.requests.as_ref()
    }

    pub fn set_requests(
        &mut self,
        requests: impl Into<Option<SemanticTokensClientCapabilitiesRequests>>,
    ) -> Result<(), ModelError> {
        self.requests = Some(require(requests.into(), "requests")?);
        Ok(())
    }

    pub fn token_types(&self) -> Option<&[String]> {
        self.token_types.as_deref()
    }

    pub fn set_token_types(
        &mut self,
        token_types: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.token_types = Some(require(token_types.into(), "tokenTypes")?);
        Ok(())
    }

    pub fn token_modifiers(&self) -> Option<&[String]> {
        self.token_modifiers.as_deref()
    }

    pub fn set_token_modifiers(
        &mut self,
        token_modifiers: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.token_modifiers = Some(require(token_modifiers.into(), "tokenModifiers")?);
        Ok(())
    }

    /// Supported token formats, see [`TokenFormat`].
    pub fn formats(&self) -> Option<&[String]> {
        self.formats.as_deref()
    }

    pub fn set_formats(
        &mut self,
        formats: impl Into<Option<Vec<String>>>,
    ) -> Result<(), ModelError> {
        self.formats = Some(require(formats.into(), "formats")?);
        Ok(())
    }

    pub fn overlapping_token_support(&self) -> Option<bool> {
        self.overlapping_token_support
    }

    pub fn set_overlapping_token_support(&mut self, value: impl Into<Option<bool>>) {
        self.overlapping_token_support = value.into();
    }

    pub fn multiline_token_support(&self) -> Option<bool> {
        self.multiline_token_support
    }

    pub fn set_multiline_token_support(&mut self, value: impl Into<Option<bool>>) {
        self.multiline_token_support = value.into();
    }

    pub fn server_cancel_support(&self) -> Option<bool> {
        self.server_cancel_support
    }

    pub fn set_server_cancel_support(&mut self, value: impl Into<Option<bool>>) {
        self.server_cancel_support = value.into();
    }

    pub fn augments_syntax_tokens(&self) -> Option<bool> {
        self.augments_syntax_tokens
    }

    pub fn set_augments_syntax_tokens(&mut self, value: impl Into<Option<bool>>) {
        self.augments_syntax_tokens = value.into();
    }
}

impl fmt::Debug for SemanticTokensCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SemanticTokensCapabilities");
        self.dynamic.render(&mut out);
        out.field("requests", &self.requests)
            .field("token_types", &self.token_types)
            .field("token_modifiers", &self.token_modifiers)
            .field("formats", &self.formats)
            .field("overlapping_token_support", &self.overlapping_token_support)
            .field("multiline_token_support", &self.multiline_token_support)
            .field("server_cancel_support", &self.server_cancel_support)
            .field("augments_syntax_tokens", &self.augments_syntax_tokens);
        out.finish()
    }
}

impl FromJson for SemanticTokensCapabilities {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["requests", "tokenTypes", "tokenModifiers", "formats"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            dynamic: DynamicRegistration::read(&obj)?,
            requests: Some(obj.required("requests")?),
            token_types: Some(obj.required("tokenTypes")?),
            token_modifiers: Some(obj.required("tokenModifiers")?),
            formats: Some(obj.required("formats")?),
            overlapping_token_support: obj.optional("overlappingTokenSupport")?,
            multiline_token_support: obj.optional("multilineTokenSupport")?,
            server_cancel_support: obj.optional("serverCancelSupport")?,
            augments_syntax_tokens: obj.optional("augmentsSyntaxTokens")?,
        })
    }
}

impl ToJson for SemanticTokensCapabilities {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.dynamic.write(&mut out);
        out.optional("requests", &self.requests)
            .optional("tokenTypes", &self.token_types)
            .optional("tokenModifiers", &self.token_modifiers)
            .optional("formats", &self.formats)
            .optional("overlappingTokenSupport", &self.overlapping_token_support)
            .optional("multilineTokenSupport", &self.multiline_token_support)
            .optional("serverCancelSupport", &self.server_cancel_support)
            .optional("augmentsSyntaxTokens", &self.augments_syntax_tokens);
        out.finish()
    }
}

impl Validate for SemanticTokensCapabilities {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.requests, "requests")?;
        validate::required(&self.token_types, "tokenTypes")?;
        validate::required(&self.token_modifiers, "tokenModifiers")?;
        validate::required(&self.formats, "formats")
    }
}

// -------------------------------------------------------------------------
// SemanticTokensParams

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SemanticTokensParams {
    progress: WorkDoneProgressParams,
    partial: PartialResultParams,
    text_document: Option<TextDocumentIdentifier>,
}

composes!(SemanticTokensParams {
    progress: WorkDoneProgressParams,
    partial: PartialResultParams,
});

impl SemanticTokensParams {
    pub fn new(text_document: TextDocumentIdentifier) -> Self {
        Self {
            text_document: Some(text_document),
            ..Self::default()
        }
    }

    pub fn text_document(&self) -> Option<&TextDocumentIdentifier> {
        self.text_document.as_ref()
    }

    pub fn set_text_document(
        &mut self,
        text_document: impl Into<Option<TextDocumentIdentifier>>,
    ) -> Result<(), ModelError> {
        self.text_document = Some(require(text_document.into(), "textDocument")?);
        Ok(())
    }
}

impl fmt::Debug for SemanticTokensParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("SemanticTokensParams");
        self.progress.render(&mut out);
        self.partial.render(&mut out);
        out.field("text_document", &self.text_document);
        out.finish()
    }
}

impl FromJson for SemanticTokensParams {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["textDocument"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            progress: WorkDoneProgressParams::read(&obj)?,
            partial: PartialResultParams::read(&obj)?,
            text_document: Some(obj.required("textDocument")?),
        })
    }
}

impl ToJson for SemanticTokensParams {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.progress.write(&mut out);
        self.partial.write(&mut out);
        out.optional("textDocument", &self.text_document);
        out.finish()
    }
}

impl Validate for SemanticTokensParams {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.text_document, "textDocument")
    }
}
