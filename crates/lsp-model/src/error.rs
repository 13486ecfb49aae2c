//! Error taxonomy for record construction and JSON decoding.

use lsp_model_either::EitherError;
use thiserror::Error;

use crate::codec::JsonKind;

/// Errors raised by guards, the codec and union accessors.
///
/// Field-carrying variants hold a path such as `contents[1].value`; the path
/// is built up while the error bubbles out of nested records and arrays. An
/// empty path refers to the value handed to the codec itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{} must not be null", display_path(.field))]
    InvalidArgument { field: String },
    #[error("missing required field {}", display_path(.field))]
    MissingField { field: String },
    #[error("{}: no candidate shape accepts a JSON {kind}", display_path(.field))]
    UnrecognizedShape { field: String, kind: JsonKind },
    #[error("{}: {reason}", display_path(.field))]
    InvalidValue { field: String, reason: String },
    #[error(transparent)]
    WrongVariantAccess(#[from] EitherError),
    #[error("malformed JSON text: {0}")]
    Syntax(String),
}

impl ModelError {
    pub fn invalid_argument(field: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn unrecognized_shape(kind: JsonKind) -> Self {
        Self::UnrecognizedShape {
            field: String::new(),
            kind,
        }
    }

    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: String::new(),
            reason: reason.into(),
        }
    }

    /// The path of the offending field, if this error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field }
            | Self::MissingField { field }
            | Self::UnrecognizedShape { field, .. }
            | Self::InvalidValue { field, .. } => Some(field.as_str()),
            Self::WrongVariantAccess(_) | Self::Syntax(_) => None,
        }
    }

    /// Prefixes the field path with an object key.
    pub fn within(self, key: &str) -> Self {
        self.prefixed(key)
    }

    /// Prefixes the field path with an array index.
    pub fn at_index(self, index: usize) -> Self {
        self.prefixed(&format!("[{index}]"))
    }

    fn prefixed(mut self, segment: &str) -> Self {
        match &mut self {
            Self::InvalidArgument { field }
            | Self::MissingField { field }
            | Self::UnrecognizedShape { field, .. }
            | Self::InvalidValue { field, .. } => {
                *field = join_path(segment, field);
            }
            Self::WrongVariantAccess(_) | Self::Syntax(_) => {}
        }
        self
    }
}

fn join_path(segment: &str, rest: &str) -> String {
    if rest.is_empty() {
        segment.to_string()
    } else if rest.starts_with('[') {
        format!("{segment}{rest}")
    } else {
        format!("{segment}.{rest}")
    }
}

fn display_path(field: &str) -> &str {
    if field.is_empty() {
        "<root>"
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_built_outside_in() {
        let err = ModelError::missing_field("value")
            .at_index(1)
            .within("contents");
        assert_eq!(err.field(), Some("contents[1].value"));
        assert_eq!(err.to_string(), "missing required field contents[1].value");
    }

    #[test]
    fn root_errors_render_placeholder() {
        let err = ModelError::unrecognized_shape(JsonKind::Number);
        assert_eq!(err.field(), Some(""));
        assert_eq!(
            err.to_string(),
            "<root>: no candidate shape accepts a JSON number"
        );
    }

    #[test]
    fn nested_keys_are_dot_separated() {
        let err = ModelError::invalid_value("unknown")
            .within("valueSet")
            .within("tagSupport");
        assert_eq!(err.field(), Some("tagSupport.valueSet"));
    }

    #[test]
    fn wrong_variant_has_no_field() {
        let err: ModelError = EitherError::WrongVariant {
            requested: "left",
            occupied: "right",
        }
        .into();
        assert_eq!(err.clone().within("x"), err);
        assert_eq!(err.field(), None);
    }
}
