//! Protocol records.
//!
//! Every record implements [`FromJson`](crate::FromJson),
//! [`ToJson`](crate::ToJson) and [`Validate`](crate::Validate). Required
//! fields are held as `Option` so that `Default` can leave them unset; the
//! convenience constructors take them by value and the setters reject `None`.

/// Declares a protocol integer enum with its wire codec. Numbers outside the
/// declared set fail with [`ModelError::InvalidValue`](crate::ModelError).
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $value,)+
        }

        impl $name {
            pub fn value(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::ModelError;

            fn try_from(value: i32) -> Result<Self, $crate::ModelError> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err($crate::ModelError::invalid_value(format!(
                        "{other} is not a valid {}",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl $crate::codec::FromJson for $name {
            fn accepts(value: &serde_json::Value) -> bool {
                value.is_number()
            }

            fn from_json(value: &serde_json::Value) -> Result<Self, $crate::ModelError> {
                Self::try_from(<i32 as $crate::codec::FromJson>::from_json(value)?)
            }
        }

        impl $crate::codec::ToJson for $name {
            fn to_json(&self) -> serde_json::Value {
                serde_json::Value::from(self.value())
            }
        }

        impl $crate::validate::Validate for $name {
            fn validate(&self) -> Result<(), $crate::ModelError> {
                Ok(())
            }
        }
    };
}

/// Implements `Composes<G>` for each listed group field of a record.
macro_rules! composes {
    ($record:ty { $($field:ident: $group:ty),+ $(,)? }) => {
        $(impl $crate::groups::Composes<$group> for $record {
            fn group(&self) -> &$group {
                &self.$field
            }

            fn group_mut(&mut self) -> &mut $group {
                &mut self.$field
            }
        })+
    };
}

mod basic;
mod completion;
mod diagnostic;
mod file_operations;
mod hover;
mod markup;
mod notebook;
mod options;
mod semantic_tokens;
mod signature_help;
mod symbol;
mod workspace;

pub use basic::{DocumentFilter, Position, ProgressToken, Range, TextDocumentIdentifier};
pub use completion::{
    CompletionItemCapabilities, CompletionItemInsertTextModeSupportCapabilities,
    CompletionItemResolveSupportCapabilities, CompletionItemTag,
    CompletionItemTagSupportCapabilities, InsertTextMode,
};
pub use diagnostic::{
    Diagnostic, DiagnosticSeverity, WorkspaceDiagnosticReport,
    WorkspaceDiagnosticReportPartialResult, WorkspaceDocumentDiagnosticReport,
    WorkspaceFullDocumentDiagnosticReport, WorkspaceUnchangedDocumentDiagnosticReport,
    WORKSPACE_DOCUMENT_DIAGNOSTIC_REPORT,
};
pub use file_operations::{
    FileOperationFilter, FileOperationOptions, FileOperationPattern, FileOperationPatternKind,
    FileOperationPatternOptions,
};
pub use hover::{Hover, HoverContents, HoverParams, HOVER_CONTENTS};
pub use markup::{MarkedString, MarkupContent, MarkupKind};
pub use notebook::{
    NotebookDocumentFilter, NotebookDocumentSyncRegistrationOptions, NotebookSelector,
    NotebookSelectorCell,
};
pub use options::{
    CodeActionRegistrationOptions, CodeLensOptions, LinkedEditingRangeCapabilities, RenameOptions,
};
pub use semantic_tokens::{
    SemanticTokensCapabilities, SemanticTokensClientCapabilitiesRequests,
    SemanticTokensClientCapabilitiesRequestsFull, SemanticTokensLegend, SemanticTokensParams,
    SemanticTokensPartialResult, SemanticTokensServerFull, SemanticTokensWithRegistrationOptions,
    TokenFormat,
};
pub use signature_help::{
    ParameterInformationCapabilities, SignatureHelpRegistrationOptions,
    SignatureInformationCapabilities,
};
pub use symbol::{DocumentSymbolRegistrationOptions, SymbolKind, SymbolKindCapabilities};
pub use workspace::{DidChangeConfigurationParams, InitializeError};
