//! Error types for transliteration reconstruction.

use thiserror::Error;
use tlh_xml::Span;

/// Result type alias for tlh-translit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a reconstruction. None of them is recoverable: the
/// renderer never skips or approximates a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The node handed to the word reconstructor is not a `<w>` element.
    #[error("only <w/> elements can be reconstructed, found <{found}>")]
    UnsupportedRoot { found: String, span: Span },

    /// An element somewhere in the word has a tag outside the known vocabulary.
    #[error("tag <{tag}> is not supported in transliterations")]
    UnsupportedTag { tag: String, span: Span },

    /// The word markup could not be parsed.
    #[error(transparent)]
    Xml(#[from] tlh_xml::Error),
}

impl Error {
    /// Stable code identifying the error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedRoot { .. } => "T-1-1",
            Error::UnsupportedTag { .. } => "T-1-2",
            Error::Xml(_) => "T-1-3",
        }
    }

    /// Source span of the offending element, when it came from parsed text.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::UnsupportedRoot { span, .. } | Error::UnsupportedTag { span, .. } => {
                Some(*span).filter(|s| !s.is_empty())
            }
            Error::Xml(err) => err.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let root = Error::UnsupportedRoot {
            found: "lb".to_string(),
            span: Span::default(),
        };
        insta::assert_snapshot!(root.to_string(), @"only <w/> elements can be reconstructed, found <lb>");

        let tag = Error::UnsupportedTag {
            tag: "gap".to_string(),
            span: Span::new(3, 10),
        };
        insta::assert_snapshot!(tag.to_string(), @"tag <gap> is not supported in transliterations");
    }

    #[test]
    fn test_span_of_built_tree_is_none() {
        let err = Error::UnsupportedTag {
            tag: "gap".to_string(),
            span: Span::default(),
        };
        assert_eq!(err.span(), None);
        assert_eq!(err.code(), "T-1-2");
    }

    #[test]
    fn test_xml_errors_keep_their_span() {
        let err = Error::from(tlh_xml::Error::MultipleRoots {
            span: Some(Span::new(4, 8)),
        });
        assert_eq!(err.code(), "T-1-3");
        assert_eq!(err.span(), Some(Span::new(4, 8)));
        assert_eq!(err.to_string(), "Invalid XML: multiple root elements");
    }
}
