//! Workspace file-operation registration (`didCreate`, `willRename`, ...).

use serde_json::Value;

use crate::codec::{has_keys, FromJson, ObjectReader, ObjectWriter, ToJson};
use crate::guard::require;
use crate::validate::{self, Validate};
use crate::ModelError;

/// Values of [`FileOperationPattern::matches`].
pub struct FileOperationPatternKind;

impl FileOperationPatternKind {
    pub const FILE: &'static str = "file";
    pub const FOLDER: &'static str = "folder";
}

// -------------------------------------------------------------------------
// FileOperationPatternOptions

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileOperationPatternOptions {
    ignore_case: Option<bool>,
}

impl FileOperationPatternOptions {
    pub fn new(ignore_case: impl Into<Option<bool>>) -> Self {
        Self {
            ignore_case: ignore_case.into(),
        }
    }

    pub fn ignore_case(&self) -> Option<bool> {
        self.ignore_case
    }

    pub fn set_ignore_case(&mut self, value: impl Into<Option<bool>>) {
        self.ignore_case = value.into();
    }
}

impl FromJson for FileOperationPatternOptions {
    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            ignore_case: obj.optional("ignoreCase")?,
        })
    }
}

impl ToJson for FileOperationPatternOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("ignoreCase", &self.ignore_case);
        out.finish()
    }
}

impl Validate for FileOperationPatternOptions {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

// -------------------------------------------------------------------------
// FileOperationPattern

/// A glob matched against file or folder paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileOperationPattern {
    glob: Option<String>,
    matches: Option<String>,
    options: Option<FileOperationPatternOptions>,
}

impl FileOperationPattern {
    pub fn new(glob: impl Into<String>) -> Self {
        Self {
            glob: Some(glob.into()),
            ..Self::default()
        }
    }

    pub fn glob(&self) -> Option<&str> {
        self.glob.as_deref()
    }

    pub fn set_glob(&mut self, glob: impl Into<Option<String>>) -> Result<(), ModelError> {
        self.glob = Some(require(glob.into(), "glob")?);
        Ok(())
    }

    /// Restricts the pattern to files or folders; both when unset.
    pub fn matches(&self) -> Option<&str> {
        self.matches.as_deref()
    }

    pub fn set_matches(&mut self, matches: impl Into<Option<String>>) {
        self.matches = matches.into();
    }

    pub fn options(&self) -> Option<&FileOperationPatternOptions> {
        self.options.as_ref()
    }

    pub fn set_options(&mut self, options: impl Into<Option<FileOperationPatternOptions>>) {
        self.options = options.into();
    }
}

impl FromJson for FileOperationPattern {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["glob"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            glob: Some(obj.required("glob")?),
            matches: obj.optional("matches")?,
            options: obj.optional("options")?,
        })
    }
}

impl ToJson for FileOperationPattern {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("glob", &self.glob)
            .optional("matches", &self.matches)
            .optional("options", &self.options);
        out.finish()
    }
}

impl Validate for FileOperationPattern {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.glob, "glob")
    }
}

// -------------------------------------------------------------------------
// FileOperationFilter

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileOperationFilter {
    scheme: Option<String>,
    pattern: Option<FileOperationPattern>,
}

impl FileOperationFilter {
    pub fn new(pattern: FileOperationPattern) -> Self {
        Self {
            scheme: None,
            pattern: Some(pattern),
        }
    }

    pub fn with_scheme(pattern: FileOperationPattern, scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            pattern: Some(pattern),
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<Option<String>>) {
        self.scheme = scheme.into();
    }

    pub fn pattern(&self) -> Option<&FileOperationPattern> {
        self.pattern.as_ref()
    }

    pub fn set_pattern(
        &mut self,
        pattern: impl Into<Option<FileOperationPattern>>,
    ) -> Result<(), ModelError> {
        self.pattern = Some(require(pattern.into(), "pattern")?);
        Ok(())
    }
}

impl FromJson for FileOperationFilter {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["pattern"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            scheme: obj.optional("scheme")?,
            pattern: Some(obj.required("pattern")?),
        })
    }
}

impl ToJson for FileOperationFilter {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("scheme", &self.scheme)
            .optional("pattern", &self.pattern);
        out.finish()
    }
}

impl Validate for FileOperationFilter {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.pattern, "pattern")
    }
}

// -------------------------------------------------------------------------
// FileOperationOptions

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileOperationOptions {
    filters: Option<Vec<FileOperationFilter>>,
}

impl FileOperationOptions {
    pub fn new(filters: Vec<FileOperationFilter>) -> Self {
        Self {
            filters: Some(filters),
        }
    }

    pub fn filters(&self) -> Option<&[FileOperationFilter]> {
        self.filters.as_deref()
    }

    pub fn set_filters(
        &mut self,
        filters: impl Into<Option<Vec<FileOperationFilter>>>,
    ) -> Result<(), ModelError> {
        self.filters = Some(require(filters.into(), "filters")?);
        Ok(())
    }
}

impl FromJson for FileOperationOptions {
    fn accepts(value: &Value) -> bool {
        has_keys(value, &["filters"])
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            filters: Some(obj.required("filters")?),
        })
    }
}

impl ToJson for FileOperationOptions {
    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        out.optional("filters", &self.filters);
        out.finish()
    }
}

impl Validate for FileOperationOptions {
    fn validate(&self) -> Result<(), ModelError> {
        validate::required(&self.filters, "filters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_round_trip() {
        let value = json!({"filters": [
            {"scheme": "file", "pattern": {
                "glob": "**/*.rs", "matches": "file", "options": {"ignoreCase": true}
            }},
            {"pattern": {"glob": "**/target"}}
        ]});
        let options = FileOperationOptions::from_json(&value).unwrap();
        let filters = options.filters().unwrap();
        assert_eq!(filters.len(), 2);
        let first = filters[0].pattern().unwrap();
        assert_eq!(first.matches(), Some(FileOperationPatternKind::FILE));
        assert_eq!(first.options().and_then(|o| o.ignore_case()), Some(true));
        assert_eq!(filters[1].scheme(), None);
        assert_eq!(options.to_json(), value);
    }

    #[test]
    fn missing_glob_is_reported_with_path() {
        let value = json!({"filters": [
            {"pattern": {"glob": "*"}},
            {"pattern": {"matches": "folder"}}
        ]});
        assert_eq!(
            FileOperationOptions::from_json(&value).unwrap_err(),
            ModelError::missing_field("filters[1].pattern.glob")
        );
    }

    #[test]
    fn built_filters_validate_nested_requirements() {
        let mut filter = FileOperationFilter::default();
        assert_eq!(filter.set_pattern(None), Err(ModelError::invalid_argument("pattern")));
        filter.set_pattern(FileOperationPattern::default()).unwrap();
        let options = FileOperationOptions::new(vec![filter]);
        assert_eq!(
            options.validate(),
            Err(ModelError::missing_field("filters[0].pattern.glob"))
        );
        assert_eq!(
            FileOperationOptions::default().validate(),
            Err(ModelError::missing_field("filters"))
        );
    }
}
