//! Property tests: decode(encode(v)) == v for records carrying unions.

use lsp_model::groups::{HasDocumentSelector, HasRegistrationId, HasWorkDoneProgress};
use lsp_model::protocol::{
    Diagnostic, DiagnosticSeverity, DocumentFilter, Hover, HoverContents, MarkedString,
    MarkupContent, NotebookDocumentFilter, NotebookSelector, NotebookSelectorCell, Position,
    ProgressToken, Range, SemanticTokensLegend, SemanticTokensServerFull,
    SemanticTokensWithRegistrationOptions, WorkspaceDocumentDiagnosticReport,
    WorkspaceFullDocumentDiagnosticReport, WorkspaceUnchangedDocumentDiagnosticReport,
};
use lsp_model::{decode, encode, Either, Either3, FromJson, ToJson};
use proptest::option;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-z#` ]{0,12}"
}

fn position() -> impl Strategy<Value = Position> {
    (any::<u32>(), any::<u32>()).prop_map(|(line, character)| Position::new(line, character))
}

fn range() -> impl Strategy<Value = Range> {
    (position(), position()).prop_map(|(start, end)| Range::new(start, end))
}

fn marked() -> impl Strategy<Value = Either<String, MarkedString>> {
    prop_oneof![
        text().prop_map(Either::Left),
        (text(), text()).prop_map(|(lang, value)| Either::Right(MarkedString::new(lang, value))),
    ]
}

fn hover_contents() -> impl Strategy<Value = HoverContents> {
    prop_oneof![
        text().prop_map(Either3::for_first),
        prop::collection::vec(marked(), 0..4).prop_map(Either3::for_second),
        (text(), text())
            .prop_map(|(kind, value)| Either3::for_third(MarkupContent::new(kind, value))),
    ]
}

fn progress_token() -> impl Strategy<Value = ProgressToken> {
    prop_oneof![
        text().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn severity() -> impl Strategy<Value = DiagnosticSeverity> {
    prop_oneof![
        Just(DiagnosticSeverity::Error),
        Just(DiagnosticSeverity::Warning),
        Just(DiagnosticSeverity::Information),
        Just(DiagnosticSeverity::Hint),
    ]
}

fn diagnostic() -> impl Strategy<Value = Diagnostic> {
    (
        range(),
        text(),
        option::of(severity()),
        option::of(progress_token()),
        option::of(text()),
    )
        .prop_map(|(range, message, severity, code, source)| {
            let mut diagnostic = Diagnostic::new(range, message);
            diagnostic.set_severity(severity);
            diagnostic.set_code(code);
            diagnostic.set_source(source);
            diagnostic
        })
}

fn document_report() -> impl Strategy<Value = WorkspaceDocumentDiagnosticReport> {
    prop_oneof![
        (text(), prop::collection::vec(diagnostic(), 0..3), option::of(any::<i32>())).prop_map(
            |(uri, items, version)| {
                let mut report = WorkspaceFullDocumentDiagnosticReport::new(uri, items);
                report.set_version(version);
                report.into()
            }
        ),
        (text(), text()).prop_map(|(uri, result_id)| {
            WorkspaceUnchangedDocumentDiagnosticReport::new(uri, result_id).into()
        }),
    ]
}

fn semantic_options() -> impl Strategy<Value = SemanticTokensWithRegistrationOptions> {
    (
        prop::collection::vec(text(), 0..3),
        option::of(prop_oneof![
            any::<bool>().prop_map(Either::Left),
            option::of(any::<bool>())
                .prop_map(|delta| Either::Right(SemanticTokensServerFull::new(delta))),
        ]),
        option::of(any::<bool>()),
        option::of(text()),
        option::of(prop::collection::vec(option::of(text()), 0..2)),
    )
        .prop_map(|(types, full, progress, id, languages)| {
            let legend = SemanticTokensLegend::new(types, vec![]);
            let mut options = SemanticTokensWithRegistrationOptions::new(legend);
            options.set_full(full);
            options.set_work_done_progress(progress);
            options.set_id(id);
            options.set_document_selector(languages.map(|langs| {
                langs
                    .into_iter()
                    .map(|lang| DocumentFilter::new(lang, None, None))
                    .collect::<Vec<_>>()
            }));
            options
        })
}

fn notebook_selector() -> impl Strategy<Value = NotebookSelector> {
    (
        option::of(prop_oneof![
            text().prop_map(Either::Left),
            (option::of(text()), option::of(text()))
                .prop_map(|(kind, scheme)| {
                    Either::Right(NotebookDocumentFilter::new(kind, scheme, None))
                }),
        ]),
        option::of(prop::collection::vec(text().prop_map(NotebookSelectorCell::new), 0..3)),
    )
        .prop_map(|(notebook, cells)| NotebookSelector::new(notebook, cells))
}

fn assert_round_trip<T>(value: &T) -> Result<(), TestCaseError>
where
    T: FromJson + ToJson + PartialEq + std::fmt::Debug,
{
    let json = encode(value);
    let back: T = decode(&json).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&back, value);
    prop_assert_eq!(encode(&back), json);
    Ok(())
}

proptest! {
    #[test]
    fn hover_round_trips(contents in hover_contents(), range in option::of(range())) {
        let mut hover = Hover::new(contents);
        hover.set_range(range);
        assert_round_trip(&hover)?;
    }

    #[test]
    fn diagnostics_round_trip(diagnostic in diagnostic()) {
        assert_round_trip(&diagnostic)?;
    }

    #[test]
    fn document_reports_round_trip(report in document_report()) {
        assert_round_trip(&report)?;
    }

    #[test]
    fn semantic_token_options_round_trip(options in semantic_options()) {
        assert_round_trip(&options)?;
    }

    #[test]
    fn notebook_selectors_round_trip(selector in notebook_selector()) {
        assert_round_trip(&selector)?;
    }

    #[test]
    fn progress_tokens_keep_their_side(token in progress_token()) {
        let json = token.to_json();
        prop_assert_eq!(json.is_string(), token.is_left());
        prop_assert_eq!(ProgressToken::from_json(&json).unwrap(), token);
    }
}
