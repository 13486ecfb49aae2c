//! Diagnostics and the workspace diagnostic pull reports.

use lsp_model_either::Either;
use serde_json::Value;

use super::Range;
use crate::codec::{has_keys, Candidate, FromJson, ObjectReader, ObjectWriter, ShapeTable, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

int_enum! {
    pub enum DiagnosticSeverity {
        Error = 1,
        Warning = 2,
        Information = 3,
        Hint = 4,
    }
}

// -------------------------------------------------------------------------
// Diagnostic

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    range: Option<Range>,
    message: Option<String>,
    severity: Option<DiagnosticSeverity>,
    code: Option<Either<String, i32>>,
    source: Option<String>,
}

impl Diagnostic {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn range(&self) -> Option<&Range> {
        self.range.as_ref()
    }

    pub fn set_range(&mut self, range: impl Into<Option<Range>>) -> Result<(), ModelError> {
        self.range = Some(require(range.into(), "range")?);
        Ok(())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.message = Some(require(message.into(), "message")?);
        Ok(())
    }

    pub fn severity(&self) -> Option<DiagnosticSeverity> {
        self.severity
    }

    pub fn set_severity(&mut self, severity: impl Into<Option<DiagnosticSeverity>>) {
        self.severity = severity.into();
    }

    pub fn code(&self) -> Option<&Either<String, i32>> {
        self.code.as_ref()
    }

    pub fn set_code(&mut self, code: impl Into<Option<Either<String, i32>>>) {
        self.code = code.into();
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: impl Into<Option<String>>) {
        self.source = source.into();
    }
}

impl FromJson for Diagnostic {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["range", "message"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            range: Some(obj.required("range")?),
            message: Some(obj.required("message")?),
            severity: obj.optional("severity")?,
            code: obj.optional("code")?,
            source: obj.optional("source")?,
        })
    }
}

impl ToJson for Diagnostic {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("range", &self.range)
            .optional("message", &self.message)
            .optional("severity", &self.severity)
            .optional("code", &self.code)
            .optional("source", &self.source);
        out.finish()
    }
}

impl Validate for Diagnostic {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.range, "range")?;
        validate::required(&self.message, "message")
    }
}

// -------------------------------------------------------------------------
// Workspace document reports

const FULL: &str = "full";
const UNCHANGED: &str = "unchanged";

fn kind_is(value: &Value, kind: &str) -> bool {
    value.get("kind").and_then(Value::as_str) == Some(kind)
}

/// A full diagnostic report for one document of the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkspaceFullDocumentDiagnosticReport {
    uri: Option<String>,
    version: Option<i32>,
    items: Option<Vec<Diagnostic>>,
    result_id: Option<String>,
}

impl WorkspaceFullDocumentDiagnosticReport {
    pub fn new(uri: impl Into<String>, items: Vec<Diagnostic>) -> Self {
        Self {
            uri: Some(uri.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> &'static str {
        FULL
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.uri = Some(require(uri.into(), "uri")?);
        Ok(())
    }

    /// Document version the report refers to; unset for documents that are
    /// not open.
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, version: impl Into<Option<i32>>) {
        self.version = version.into();
    }

    pub fn items(&self) -> Option<&[Diagnostic]> {
        self.items.as_deref()
    }

    pub fn set_items(
        &mut self,
        items: impl Into<Option<Vec<Diagnostic>>>,
    ) -> Result<(), ModelError> {
        self.items = Some(require(items.into(), "items")?);
        Ok(())
    }

    pub fn result_id(&self) -> Option<&str> {
        self.result_id.as_deref()
    }

    pub fn set_result_id(&mut self, result_id: impl Into<Option<String>>) {
        self.result_id = result_id.into();
    }
}

impl FromJson for WorkspaceFullDocumentDiagnosticReport {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["kind", "uri", "items"]) && kind_is(value, FULL)
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        obj.constant("kind", FULL)?;
        Ok(Self {
            uri: Some(obj.required("uri")?),
            version: obj.optional("version")?,
            items: Some(obj.required("items")?),
            result_id: obj.optional("resultId")?,
        })
    }
}

impl ToJson for WorkspaceFullDocumentDiagnosticReport {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.field("kind", FULL)
            .optional("resultId", &self.result_id)
            .optional("items", &self.items)
            .optional("uri", &self.uri)
            .optional("version", &self.version);
        out.finish()
    }
}

impl Validate for WorkspaceFullDocumentDiagnosticReport {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.uri, "uri")?;
        validate::required(&self.items, "items")
    }
}

/// Reports that the document's diagnostics have not changed since
/// `result_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkspaceUnchangedDocumentDiagnosticReport {
    uri: Option<String>,
    version: Option<i32>,
    result_id: Option<String>,
}

impl WorkspaceUnchangedDocumentDiagnosticReport {
    pub fn new(uri: impl Into<String>, result_id: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            version: None,
            result_id: Some(result_id.into()),
        }
    }

    pub fn kind(&self) -> &'static str {
        UNCHANGED
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.uri = Some(require(uri.into(), "uri")?);
        Ok(())
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, version: impl Into<Option<i32>>) {
        self.version = version.into();
    }

    pub fn result_id(&self) -> Option<&str> {
        self.result_id.as_deref()
    }

    pub fn set_result_id(
        &mut self,
        result_id: impl Into<Option<String>>,
    ) -> Result<(), ModelError> {
        self.result_id = Some(require(result_id.into(), "resultId")?);
        Ok(())
    }
}

impl FromJson for WorkspaceUnchangedDocumentDiagnosticReport {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["kind", "uri", "resultId"]) && kind_is(value, UNCHANGED)
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        obj.constant("kind", UNCHANGED)?;
        Ok(Self {
            uri: Some(obj.required("uri")?),
            version: obj.optional("version")?,
            result_id: Some(obj.required("resultId")?),
        })
    }
}

impl ToJson for WorkspaceUnchangedDocumentDiagnosticReport {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.field("kind", UNCHANGED)
            .optional("resultId", &self.result_id)
            .optional("uri", &self.uri)
            .optional("version", &self.version);
        out.finish()
    }
}

impl Validate for WorkspaceUnchangedDocumentDiagnosticReport {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.uri, "uri")?;
        validate::required(&self.result_id, "resultId")
    }
}

fn full_report(value: &Value) -> Result<WorkspaceDocumentDiagnosticReport, ModelError> {
    WorkspaceFullDocumentDiagnosticReport::from_json(value)
        .map(WorkspaceDocumentDiagnosticReport::from)
}

fn unchanged_report(value: &Value) -> Result<WorkspaceDocumentDiagnosticReport, ModelError> {
    WorkspaceUnchangedDocumentDiagnosticReport::from_json(value)
        .map(WorkspaceDocumentDiagnosticReport::from)
}

const REPORT_CANDIDATES: &[Candidate<WorkspaceDocumentDiagnosticReport>] = &[
    Candidate::new(FULL, WorkspaceFullDocumentDiagnosticReport::accepts, full_report),
    Candidate::new(
        UNCHANGED,
        WorkspaceUnchangedDocumentDiagnosticReport::accepts,
        unchanged_report,
    ),
];

/// Report shapes, discriminated by the `kind` constant together with the
/// keys each report requires.
pub const WORKSPACE_DOCUMENT_DIAGNOSTIC_REPORT: ShapeTable<
    'static,
    WorkspaceDocumentDiagnosticReport,
> = ShapeTable::new(REPORT_CANDIDATES);

/// Either a full or an unchanged report for one workspace document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceDocumentDiagnosticReport(
    Either<WorkspaceFullDocumentDiagnosticReport, WorkspaceUnchangedDocumentDiagnosticReport>,
);

impl WorkspaceDocumentDiagnosticReport {
    pub fn is_full(&self) -> bool {
        self.0.is_left()
    }

    pub fn is_unchanged(&self) -> bool {
        self.0.is_right()
    }

    pub fn full(&self) -> Option<&WorkspaceFullDocumentDiagnosticReport> {
        self.0.left()
    }

    pub fn unchanged(&self) -> Option<&WorkspaceUnchangedDocumentDiagnosticReport> {
        self.0.right()
    }

    pub fn get_full(&self) -> Result<&WorkspaceFullDocumentDiagnosticReport, ModelError> {
        Ok(self.0.get_left()?)
    }

    pub fn get_unchanged(&self) -> Result<&WorkspaceUnchangedDocumentDiagnosticReport, ModelError> {
        Ok(self.0.get_right()?)
    }

    pub fn as_either(
        &self,
    ) -> &Either<WorkspaceFullDocumentDiagnosticReport, WorkspaceUnchangedDocumentDiagnosticReport>
    {
        &self.0
    }

    pub fn into_either(
        self,
    ) -> Either<WorkspaceFullDocumentDiagnosticReport, WorkspaceUnchangedDocumentDiagnosticReport>
    {
        self.0
    }
}

impl From<WorkspaceFullDocumentDiagnosticReport> for WorkspaceDocumentDiagnosticReport {
    fn from(report: WorkspaceFullDocumentDiagnosticReport) -> Self {
        Self(Either::Left(report))
    }
}

impl From<WorkspaceUnchangedDocumentDiagnosticReport> for WorkspaceDocumentDiagnosticReport {
    fn from(report: WorkspaceUnchangedDocumentDiagnosticReport) -> Self {
        Self(Either::Right(report))
    }
}

impl FromJson for WorkspaceDocumentDiagnosticReport {
    fn accepts(value: &Value) -> bool {
        WORKSPACE_DOCUMENT_DIAGNOSTIC_REPORT.accepts(value)
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        WORKSPACE_DOCUMENT_DIAGNOSTIC_REPORT.decode(value)
    }
}

impl ToJson for WorkspaceDocumentDiagnosticReport {
    fn to_json(&self) -> Value {
        self.0.to_json()
    }
}

impl Validate for WorkspaceDocumentDiagnosticReport {
    fn validate(&self) -> Result<(), ModelError> {
        self.0.validate()
    }
}

// -------------------------------------------------------------------------
// Workspace report and its partial result

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkspaceDiagnosticReport {
    items: Option<Vec<WorkspaceDocumentDiagnosticReport>>,
}

impl WorkspaceDiagnosticReport {
    pub fn new(items: Vec<WorkspaceDocumentDiagnosticReport>) -> Self {
        Self { items: Some(items) }
    }

    pub fn items(&self) -> Option<&[WorkspaceDocumentDiagnosticReport]> {
        self.items.as_deref()
    }

    pub fn set_items(
        &mut self,
        items: impl Into<Option<Vec<WorkspaceDocumentDiagnosticReport>>>,
    ) -> Result<(), ModelError> {
        self.items = Some(require(items.into(), "items")?);
        Ok(())
    }
}

impl FromJson for WorkspaceDiagnosticReport {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["items"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            items: Some(obj.required("items")?),
        })
    }
}

impl ToJson for WorkspaceDiagnosticReport {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("items", &self.items);
        out.finish()
    }
}

impl Validate for WorkspaceDiagnosticReport {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.items, "items")
    }
}

/// A batch of reports streamed before the final [`WorkspaceDiagnosticReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkspaceDiagnosticReportPartialResult {
    items: Option<Vec<WorkspaceDocumentDiagnosticReport>>,
}

impl WorkspaceDiagnosticReportPartialResult {
    pub fn new(items: Vec<WorkspaceDocumentDiagnosticReport>) -> Self {
        Self { items: Some(items) }
    }

    pub fn items(&self) -> Option<&[WorkspaceDocumentDiagnosticReport]> {
        self.items.as_deref()
    }

    pub fn set_items(
        &mut self,
        items: impl Into<Option<Vec<WorkspaceDocumentDiagnosticReport>>>,
    ) -> Result<(), ModelError> {
        self.items = Some(require(items.into(), "items")?);
        Ok(())
    }
}

impl FromJson for WorkspaceDiagnosticReportPartialResult {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["items"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            items: Some(obj.required("items")?),
        })
    }
}

impl ToJson for WorkspaceDiagnosticReportPartialResult {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("items", &self.items);
        out.finish()
    }
}

impl Validate for WorkspaceDiagnosticReportPartialResult {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.items, "items")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Position;
    use serde_json::json;

    fn sample_diagnostic() -> Diagnostic {
        let mut diagnostic = Diagnostic::new(
            Range::new(Position::new(1, 0), Position::new(1, 4)),
            "unused variable",
        );
        diagnostic.set_severity(DiagnosticSeverity::Warning);
        diagnostic.set_code(Either::Right(6133));
        diagnostic
    }

    #[test]
    fn diagnostic_round_trip() {
        let diagnostic = sample_diagnostic();
        let value = diagnostic.to_json();
        assert_eq!(
            value,
            json!({
                "range": {
                    "start": {"line": 1, "character": 0},
                    "end": {"line": 1, "character": 4}
                },
                "message": "unused variable",
                "severity": 2,
                "code": 6133
            })
        );
        assert_eq!(Diagnostic::from_json(&value).unwrap(), diagnostic);
    }

    #[test]
    fn severity_outside_range_is_invalid() {
        assert_eq!(DiagnosticSeverity::try_from(1), Ok(DiagnosticSeverity::Error));
        assert_eq!(DiagnosticSeverity::try_from(4), Ok(DiagnosticSeverity::Hint));
        assert_eq!(
            DiagnosticSeverity::try_from(0),
            Err(ModelError::invalid_value("0 is not a valid DiagnosticSeverity"))
        );
        let err = DiagnosticSeverity::from_json(&json!(5)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { .. }));
    }

    #[test]
    fn reports_are_selected_by_kind() {
        let full = json!({"kind": "full", "uri": "file:///a", "items": [], "version": 3});
        let unchanged =
            json!({"kind": "unchanged", "uri": "file:///b", "resultId": "r1", "version": null});

        let report = WorkspaceDocumentDiagnosticReport::from_json(&full).unwrap();
        assert!(report.is_full());
        assert_eq!(report.full().and_then(|r| r.version()), Some(3));
        assert!(report.get_unchanged().is_err());
        assert_eq!(report.to_json(), full);

        let report = WorkspaceDocumentDiagnosticReport::from_json(&unchanged).unwrap();
        assert!(report.is_unchanged());
        assert_eq!(report.get_unchanged().unwrap().result_id(), Some("r1"));
        assert_eq!(
            report.to_json(),
            json!({"kind": "unchanged", "resultId": "r1", "uri": "file:///b"})
        );
    }

    #[test]
    fn unknown_report_kind_is_unrecognized() {
        let value = json!({"kind": "partial", "uri": "file:///a", "items": []});
        assert!(matches!(
            WorkspaceDocumentDiagnosticReport::from_json(&value),
            Err(ModelError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn workspace_report_errors_carry_item_path() {
        let value = json!({"items": [
            {"kind": "full", "uri": "file:///a", "items": [{"range": {
                "start": {"line": 0, "character": 0},
                "end": {"line": 0, "character": 1}
            }}]}
        ]});
        let err = WorkspaceDiagnosticReport::from_json(&value).unwrap_err();
        assert_eq!(err, ModelError::missing_field("items[0].items[0].message"));
    }

    #[test]
    fn partial_result_requires_items() {
        assert_eq!(
            WorkspaceDiagnosticReportPartialResult::default().validate(),
            Err(ModelError::missing_field("items"))
        );
        let full =
            WorkspaceFullDocumentDiagnosticReport::new("file:///a", vec![sample_diagnostic()]);
        let report = WorkspaceDocumentDiagnosticReport::from(full);
        let partial = WorkspaceDiagnosticReportPartialResult::new(vec![report]);
        assert!(partial.validate().is_ok());
        assert_eq!(
            WorkspaceDiagnosticReportPartialResult::from_json(&partial.to_json()).unwrap(),
            partial
        );
    }
}
