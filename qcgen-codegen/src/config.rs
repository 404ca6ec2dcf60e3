//! Formatting configuration for [`SourceBuilder`](crate::SourceBuilder).

use serde::Deserialize;

/// Four spaces, the indent unit used for Python sources.
pub const DEFAULT_INDENT: &str = "    ";

/// Maximum docstring line width, indentation included.
pub const DEFAULT_DOC_WIDTH: usize = 72;

/// Triple double quotes.
pub const DEFAULT_DOC_DELIMITER: &str = "\"\"\"";

/// Configuration fixed at builder construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// String repeated once per indentation level.
    #[serde(rename = "indent")]
    pub indent_unit: String,
    /// Column budget for docstrings.
    pub doc_width: usize,
    /// Delimiter written around docstrings.
    pub doc_delimiter: String,
}

impl BuilderConfig {
    /// 4-space indentation and triple-quoted docstrings (Python).
    pub fn python() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT.to_string(),
            doc_width: DEFAULT_DOC_WIDTH,
            doc_delimiter: DEFAULT_DOC_DELIMITER.to_string(),
        }
    }

    /// Tab indentation, other settings unchanged.
    pub fn tabs() -> Self {
        Self::python().with_indent_unit("\t")
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_doc_width(mut self, width: usize) -> Self {
        self.doc_width = width;
        self
    }

    pub fn with_doc_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.doc_delimiter = delimiter.into();
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::python()
    }
}
