//! Basic structures shared across requests.

use lsp_model_either::Either;
use serde_json::Value;

use crate::codec::{has_keys, FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// Progress token: a string or an integer chosen by the requester.
pub type ProgressToken = Either<String, i32>;

// -------------------------------------------------------------------------
// Position

/// Zero-based line and UTF-16 character offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    line: u32,
    character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    pub fn character(&self) -> u32 {
        self.character
    }

    pub fn set_character(&mut self, character: u32) {
        self.character = character;
    }
}

impl FromJson for Position {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["line", "character"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            line: obj.required("line")?,
            character: obj.required("character")?,
        })
    }
}

impl ToJson for Position {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.field("line", &self.line)
            .field("character", &self.character);
        out.finish()
    }
}

impl Validate for Position {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// -------------------------------------------------------------------------
// Range

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    start: Option<Position>,
    end: Option<Position>,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<&Position> {
        self.start.as_ref()
    }

    pub fn set_start(&mut self, start: impl Into<Option<Position>>) -> Result<(), ModelError> {
        self.start = Some(require(start.into(), "start")?);
        Ok(())
    }

    pub fn end(&self) -> Option<&Position> {
        self.end.as_ref()
    }

    pub fn set_end(&mut self, end: impl Into<Option<Position>>) -> Result<(), ModelError> {
        self.end = Some(require(end.into(), "end")?);
        Ok(())
    }
}

impl FromJson for Range {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["start", "end"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            start: Some(obj.required("start")?),
            end: Some(obj.required("end")?),
        })
    }
}

impl ToJson for Range {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("start", &self.start).optional("end", &self.end);
        out.finish()
    }
}

impl Validate for Range {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.start, "start")?;
        validate::required(&self.end, "end")
    }
}

// -------------------------------------------------------------------------
// TextDocumentIdentifier

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextDocumentIdentifier {
    uri: Option<String>,
}

impl TextDocumentIdentifier {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
        }
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.uri = Some(require(uri.into(), "uri")?);
        Ok(())
    }
}

impl FromJson for TextDocumentIdentifier {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["uri"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            uri: Some(obj.required("uri")?),
        })
    }
}

impl ToJson for TextDocumentIdentifier {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("uri", &self.uri);
        out.finish()
    }
}

impl Validate for TextDocumentIdentifier {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.uri, "uri")
    }
}

// -------------------------------------------------------------------------
// DocumentFilter

/// Filters documents by language id, URI scheme, or glob pattern. At least
/// one of the three is expected, but none is individually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocumentFilter {
    language: Option<String>,
    scheme: Option<String>,
    pattern: Option<String>,
}

impl DocumentFilter {
    pub fn new(
        language: impl Into<Option<String>>,
        scheme: impl Into<Option<String>>,
        pattern: impl Into<Option<String>>,
    ) -> Self {
        Self {
            language: language.into(),
            scheme: scheme.into(),
            pattern: pattern.into(),
        }
    }

    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: impl Into<Option<String>>) {
        self.language = language.into();
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<Option<String>>) {
        self.scheme = scheme.into();
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn set_pattern(&mut self, pattern: impl Into<Option<String>>) {
        self.pattern = pattern.into();
    }
}

impl FromJson for DocumentFilter {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            language: obj.optional("language")?,
            scheme: obj.optional("scheme")?,
            pattern: obj.optional("pattern")?,
        })
    }
}

impl ToJson for DocumentFilter {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("language", &self.language)
            .optional("scheme", &self.scheme)
            .optional("pattern", &self.pattern);
        out.finish()
    }
}

impl Validate for DocumentFilter {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
