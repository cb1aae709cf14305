//! Error types for loading and validating emoji engine settings.

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};

/// Main error type for configuration and data loading.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum Error {
    /// IO error
    #[error(transparent)]
    #[diagnostic(code(emoji::io))]
    Io(#[from] std::io::Error),

    /// Parse error with source location
    #[error(transparent)]
    #[diagnostic_source]
    Parse(#[from] ParseError),

    /// Serialization error
    #[error(transparent)]
    #[diagnostic_source]
    Serde(#[from] SerDeError),

    /// File extension we don't know how to read or write
    #[error("unsupported file format: {0}")]
    #[diagnostic(
        code(emoji::config::format),
        help("use a file ending in .json or .toml")
    )]
    UnsupportedFormat(String),

    /// Configuration parsed fine but holds a value the engine can't use
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(emoji::config::invalid))]
    InvalidConfig(String),
}

/// Parse error with source code location information
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("parse error: {}", self.kind)]
#[diagnostic(code(emoji::parse))]
pub struct ParseError {
    #[diagnostic_source]
    kind: ParseErrorKind,
    #[source_code]
    src: NamedSource<String>,
    #[label("error")]
    err_location: SourceSpan,
    #[help]
    advice: Option<String>,
}

impl ParseError {
    /// Build from a JSON error, pointing at the line/column serde_json reports.
    pub fn json(err: serde_json::Error, name: impl AsRef<str>, src: String) -> Self {
        let offset = if err.line() == 0 {
            SourceOffset::from(0)
        } else {
            SourceOffset::from_location(&src, err.line(), err.column())
        };
        Self {
            kind: ParseErrorKind::Json(err),
            src: NamedSource::new(name, src),
            err_location: SourceSpan::new(offset, 0),
            advice: None,
        }
    }

    /// Build from a TOML error, using its byte span when it has one.
    pub fn toml(err: toml::de::Error, name: impl AsRef<str>, src: String) -> Self {
        let err_location = err
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.len()))
            .unwrap_or_else(|| SourceSpan::new(0.into(), 0));
        Self {
            kind: ParseErrorKind::Toml(err),
            src: NamedSource::new(name, src),
            err_location,
            advice: None,
        }
    }

    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = Some(advice.into());
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> SourceSpan {
        self.err_location
    }
}

#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error(transparent)]
    Json(serde_json::Error),
    #[error(transparent)]
    Toml(toml::de::Error),
}

/// Serialization errors
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum SerDeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::ser::Error),
}
