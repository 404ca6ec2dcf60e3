use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A single value that could not be accepted.
///
/// Returned by the `FromStr` implementations, so it is also what the command
/// line reports for a bad flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("unknown {category} '{value}', expected one of: {expected}")]
    UnknownChoice {
        category: &'static str,
        value: String,
        expected: String,
    },

    #[error("invalid start date '{0}', expected YYYY, MM, DD")]
    InvalidStartDate(String),

    #[error("invalid cash amount '{0}', expected a positive whole number")]
    InvalidCash(String),

    #[error("invalid class name '{0}'")]
    InvalidName(String),

    #[error("no {0} selected")]
    Missing(&'static str),
}

/// Manifest text and file name kept around for diagnostics.
///
/// Errors built from it only need the offending span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// The manifest as a miette source.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a toml syntax or shape error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid value error pointing at the offending value.
    pub fn invalid_value(
        &self,
        field: &'static str,
        source: ValueError,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidValue {
            src: self.named_source(),
            span: span.into(),
            field,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run without --config to answer the questions interactively"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse strategy manifest")]
    #[diagnostic(code(qcgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}'")]
    #[diagnostic(
        code(qcgen::invalid_value),
        help("run 'qcgen options' to list the available choices")
    )]
    InvalidValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: SourceSpan,
        field: &'static str,
        #[source]
        source: ValueError,
    },
}
