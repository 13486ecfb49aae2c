//! `textDocument/hover` request and result.

use std::fmt;

use lsp_model_either::{Either, Either3};
use serde_json::Value;

use super::{MarkedString, MarkupContent, Position, Range, TextDocumentIdentifier};
use crate::codec::{has_keys, Candidate, FromJson, ObjectReader, ObjectWriter, ShapeTable, ToJson};
use crate::groups::{FieldGroup, TextDocumentPosition, WorkDoneProgressParams};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// Hover contents: a plain string, a list of marked strings, or markup.
pub type HoverContents = Either3<String, Vec<Either<String, MarkedString>>, MarkupContent>;

fn is_string(value: &Value) -> bool {
    value.is_string()
}

fn is_array(value: &Value) -> bool {
    value.is_array()
}

fn plain(value: &Value) -> Result<HoverContents, ModelError> {
    String::from_json(value).map(Either3::for_first)
}

fn marked_list(value: &Value) -> Result<HoverContents, ModelError> {
    Vec::<Either<String, MarkedString>>::from_json(value).map(Either3::for_second)
}

fn markup(value: &Value) -> Result<HoverContents, ModelError> {
    MarkupContent::from_json(value).map(Either3::for_third)
}

fn single_marked(value: &Value) -> Result<HoverContents, ModelError> {
    MarkedString::from_json(value).map(|marked| Either3::for_second(vec![Either::Right(marked)]))
}

const HOVER_CONTENTS_CANDIDATES: &[Candidate<HoverContents>] = &[
    Candidate::new("string", is_string, plain),
    Candidate::new("marked string list", is_array, marked_list),
    Candidate::new("markup content", MarkupContent::accepts, markup),
    // Legacy single `{language, value}` object; normalised to a
    // one-element list, so it re-encodes as an array.
    Candidate::new("marked string", MarkedString::accepts, single_marked),
];

/// Candidate shapes of `Hover.contents`, in priority order. An object
/// carrying `kind`, `language` and `value` is markup content.
pub const HOVER_CONTENTS: ShapeTable<'static, HoverContents> =
    ShapeTable::new(HOVER_CONTENTS_CANDIDATES);

// -------------------------------------------------------------------------
// Hover

/// The result of a hover request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hover {
    contents: Option<HoverContents>,
    range: Option<Range>,
}

impl Hover {
    pub fn new(contents: HoverContents) -> Self {
        Self {
            contents: Some(contents),
            range: None,
        }
    }

    pub fn with_range(contents: HoverContents, range: Range) -> Self {
        Self {
            contents: Some(contents),
            range: Some(range),
        }
    }

    pub fn from_markup(contents: MarkupContent) -> Self {
        Self::new(Either3::for_third(contents))
    }

    pub fn from_marked_strings(contents: Vec<Either<String, MarkedString>>) -> Self {
        Self::new(Either3::for_second(contents))
    }

    /// A single marked string, stored as a one-element list.
    pub fn from_marked_string(contents: Either<String, MarkedString>) -> Self {
        Self::from_marked_strings(vec![contents])
    }

    pub fn contents(&self) -> Option<&HoverContents> {
        self.contents.as_ref()
    }

    pub fn set_contents(
        &mut self,
        contents: impl Into<Option<HoverContents>>,
    ) -> Result<(), ModelError> {
        self.contents = Some(require(contents.into(), "contents")?);
        Ok(())
    }

    pub fn range(&self) -> Option<&Range> {
        self.range.as_ref()
    }

    pub fn set_range(&mut self, range: impl Into<Option<Range>>) {
        self.range = range.into();
    }
}

impl FromJson for Hover {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["contents"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            contents: Some(obj.required_with("contents", &HOVER_CONTENTS)?),
            range: obj.optional("range")?,
        })
    }
}

impl ToJson for Hover {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("contents", &self.contents)
            .optional("range", &self.range);
        out.finish()
    }
}

impl Validate for Hover {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.contents, "contents")?;
        validate::optional(&self.range, "range")
    }
}

// -------------------------------------------------------------------------
// HoverParams

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct HoverParams {
    position: TextDocumentPosition,
    progress: WorkDoneProgressParams,
}

impl HoverParams {
    pub fn new(text_document: TextDocumentIdentifier, position: Position) -> Self {
        Self {
            position: TextDocumentPosition::new(text_document, position),
            progress: WorkDoneProgressParams::default(),
        }
    }
}

composes!(HoverParams {
    position: TextDocumentPosition,
    progress: WorkDoneProgressParams,
});

impl fmt::Debug for HoverParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("HoverParams");
        self.position.render(&mut out);
        self.progress.render(&mut out);
        out.finish()
    }
}

impl FromJson for HoverParams {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["textDocument", "position"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            position: TextDocumentPosition::read(&obj)?,
            progress: WorkDoneProgressParams::read(&obj)?,
        })
    }
}

impl ToJson for HoverParams {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.position.write(&mut out);
        self.progress.write(&mut out);
        out.finish()
    }
}

impl Validate for HoverParams {
    fn validate(&self) -> Result<(), ModelError> {
        self.position.validate()?;
        self.progress.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{HasTextDocumentPosition, HasWorkDoneToken};
    use serde_json::json;

    #[test]
    fn contents_table_lists_candidates_in_order() {
        let labels: Vec<&str> = HOVER_CONTENTS
            .candidates()
            .iter()
            .map(Candidate::label)
            .collect();
        assert_eq!(
            labels,
            ["string", "marked string list", "markup content", "marked string"]
        );
    }

    #[test]
    fn markup_wins_over_marked_string_on_superset_objects() {
        let value = json!({"kind": "markdown", "language": "rust", "value": "x"});
        let contents = HOVER_CONTENTS.decode(&value).unwrap();
        assert!(contents.is_third());
    }

    #[test]
    fn legacy_single_marked_string_becomes_list() {
        let hover = Hover::from_json(&json!({
            "contents": {"language": "rust", "value": "fn main() {}"}
        }))
        .unwrap();
        let expected = Hover::from_marked_string(Either::Right(MarkedString::new(
            "rust",
            "fn main() {}",
        )));
        assert_eq!(hover, expected);
        assert_eq!(
            hover.to_json(),
            json!({"contents": [{"language": "rust", "value": "fn main() {}"}]})
        );
    }

    #[test]
    fn contents_errors_are_rooted_at_field() {
        let err = Hover::from_json(&json!({"contents": 42})).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnrecognizedShape {
                field: "contents".into(),
                kind: crate::JsonKind::Number,
            }
        );
        let err = Hover::from_json(&json!({"contents": ["a", {"language": "go"}]})).unwrap_err();
        assert_eq!(err.field(), Some("contents[1]"));
    }

    #[test]
    fn hover_params_flatten_groups() {
        let mut params =
            HoverParams::new(TextDocumentIdentifier::new("file:///a"), Position::new(3, 4));
        params.set_work_done_token(Either::Left("tok".to_string()));
        let value = params.to_json();
        assert_eq!(
            value,
            json!({
                "textDocument": {"uri": "file:///a"},
                "position": {"line": 3, "character": 4},
                "workDoneToken": "tok"
            })
        );
        assert_eq!(HoverParams::from_json(&value).unwrap(), params);
        assert_eq!(params.position(), Some(&Position::new(3, 4)));
    }

    #[test]
    fn hover_params_debug_lists_group_fields() {
        let params =
            HoverParams::new(TextDocumentIdentifier::new("file:///a"), Position::new(0, 0));
        let rendered = format!("{params:?}");
        assert!(rendered.starts_with("HoverParams {"));
        let td = rendered.find("text_document").unwrap();
        let pos = rendered.find("position").unwrap();
        let token = rendered.find("work_done_token").unwrap();
        assert!(td < pos && pos < token);
    }
}
