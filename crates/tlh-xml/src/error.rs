//! Error types for XML parsing with source spans.

use crate::Span;
use thiserror::Error;

/// Result type alias for tlh-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during XML parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// XML syntax error from quick-xml.
    #[error("XML syntax error: {message}")]
    XmlSyntax { message: String, span: Option<Span> },

    /// Unexpected end of input.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Option<Span> },

    /// End tag does not close the innermost open element.
    #[error("Mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        span: Option<Span>,
    },

    /// Invalid XML structure.
    #[error("Invalid XML structure: {message}")]
    InvalidStructure { message: String, span: Option<Span> },

    /// Empty document (no root element).
    #[error("Empty XML document: no root element found")]
    EmptyDocument,

    /// More than one top-level element.
    #[error("Invalid XML: multiple root elements")]
    MultipleRoots { span: Option<Span> },
}

impl Error {
    /// Stable code identifying the error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::XmlSyntax { .. } => "X-1-1",
            Error::UnexpectedEof { .. } => "X-1-2",
            Error::MismatchedEndTag { .. } => "X-1-3",
            Error::InvalidStructure { .. } => "X-1-4",
            Error::EmptyDocument => "X-1-5",
            Error::MultipleRoots { .. } => "X-1-6",
        }
    }

    /// Where in the source the error was detected, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::XmlSyntax { span, .. }
            | Error::UnexpectedEof { span, .. }
            | Error::MismatchedEndTag { span, .. }
            | Error::InvalidStructure { span, .. }
            | Error::MultipleRoots { span } => *span,
            Error::EmptyDocument => None,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlSyntax {
            message: err.to_string(),
            span: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax {
            message: format!("Attribute error: {}", err),
            span: None,
        }
    }
}
