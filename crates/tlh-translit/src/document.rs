//! Reconstruction over parsed XML: single words given as text, and every
//! word of a larger document.

use crate::error::Result;
use crate::tags::WORD_TAG;
use crate::word::reconstruct_transliteration_for_word_node;
use tlh_xml::{Span, XmlDocument};

/// The outcome for one `<w>` element of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTransliteration {
    /// Span of the `<w>` element in the document source.
    pub span: Span,

    /// The transliteration, or why this word could not be reconstructed.
    pub result: Result<String>,
}

/// Parse a single `<w>` element from XML text and reconstruct it.
///
/// # Example
///
/// ```rust
/// use tlh_translit::reconstruct_word_xml;
///
/// let xml = "<w><aGr>ANA</aGr> <d>D</d><laes_in/><sGr>10</sGr><corr c='?'/><laes_fin/></w>";
/// assert_eq!(reconstruct_word_xml(xml).unwrap(), "_ANA °D°⸢10?⸣");
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::Xml`] if the text is not well-formed XML, and the
/// reconstruction errors otherwise.
pub fn reconstruct_word_xml(content: &str) -> Result<String> {
    let document = tlh_xml::parse(content)?;
    reconstruct_transliteration_for_word_node(&document.root)
}

/// Reconstruct every `<w>` element of a document, in document order.
///
/// A failing word does not stop the others; each result is reported on its
/// own. Words nested inside other words are not visited separately.
pub fn reconstruct_document(document: &XmlDocument) -> Vec<WordTransliteration> {
    document
        .root
        .descendants_named(WORD_TAG)
        .into_iter()
        .map(|word| WordTransliteration {
            span: word.span,
            result: reconstruct_transliteration_for_word_node(word),
        })
        .collect()
}
