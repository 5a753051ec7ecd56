//! Word reconstructor: the entry point for a single `<w>` element.

use crate::error::{Error, Result};
use crate::render::{render_children, render_node};
use crate::tags::{WORD_TAG, WordTag};
use tlh_xml::{XmlElement, XmlNode};

/// Reconstruct the transliteration of one word.
///
/// The first child is rendered as the word's initial child. When the word
/// opens with an Akkadogram preposition followed by a single space (as in
/// `<aGr>ANA</aGr> <d>D</d>…`), the preposition and the space are written
/// out and the node after the space takes the initial position instead.
///
/// # Example
///
/// ```rust
/// use tlh_translit::reconstruct_transliteration_for_word_node;
/// use tlh_xml::XmlElement;
///
/// let word = XmlElement::new("w")
///     .with_child(XmlElement::new("del_in"))
///     .with_child(XmlElement::new("aGr").with_child("A-NA"));
///
/// assert_eq!(reconstruct_transliteration_for_word_node(&word).unwrap(), "[_A-NA");
/// ```
///
/// # Errors
///
/// - [`Error::UnsupportedRoot`] if `word` is not a `<w>` element.
/// - [`Error::UnsupportedTag`] if any element below it has an unknown tag.
pub fn reconstruct_transliteration_for_word_node(word: &XmlElement) -> Result<String> {
    if !word.has_name(WORD_TAG) {
        return Err(Error::UnsupportedRoot {
            found: word.qualified_name().into_owned(),
            span: word.span,
        });
    }

    let Some((first, rest)) = word.children.split_first() else {
        return Ok(String::new());
    };

    if let Some((preposition, after_space)) = akkadogram_preposition(&word.children) {
        let mut out = render_node(preposition, false)?;
        out.push(' ');
        if let Some((third, rest)) = after_space.split_first() {
            out.push_str(&render_node(third, true)?);
            out.push_str(&render_children(rest)?);
        }
        return Ok(out);
    }

    let mut out = render_node(first, true)?;
    out.push_str(&render_children(rest)?);
    Ok(out)
}

/// Detect an Akkadogram preposition: an `<aGr>` element followed by a text
/// node that is exactly one space.
///
/// Returns the preposition and the children after the space.
fn akkadogram_preposition(children: &[XmlNode]) -> Option<(&XmlNode, &[XmlNode])> {
    let [first, second, rest @ ..] = children else {
        return None;
    };

    let is_akkadogram = first
        .as_element()
        .is_some_and(|element| element.has_name(WordTag::Akkadogram.name()));

    if is_akkadogram && second.as_text() == Some(" ") {
        Some((first, rest))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlh_xml::Span;

    fn word() -> XmlElement {
        XmlElement::new(WORD_TAG)
    }

    fn agr(text: &str) -> XmlElement {
        XmlElement::new("aGr").with_child(text)
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(reconstruct_transliteration_for_word_node(&word()).unwrap(), "");
    }

    #[test]
    fn test_wrong_root() {
        let line = XmlElement::new("lb").with_span(Span::new(0, 5));
        let err = reconstruct_transliteration_for_word_node(&line).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedRoot {
                found: "lb".to_string(),
                span: Span::new(0, 5),
            }
        );
    }

    #[test]
    fn test_wrong_root_fails_even_when_childless() {
        let err = reconstruct_transliteration_for_word_node(&agr("ANA")).unwrap_err();
        assert_eq!(err.code(), "T-1-1");
    }

    #[test]
    fn test_preposition_detection() {
        let children = vec![XmlNode::from(agr("ANA")), " ".into(), "x".into()];
        let (preposition, rest) = akkadogram_preposition(&children).unwrap();
        assert_eq!(preposition, &children[0]);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_preposition_needs_exactly_one_space() {
        for second in ["", "  ", "\u{a0}", " \n"] {
            let children = vec![XmlNode::from(agr("ANA")), second.into()];
            assert!(akkadogram_preposition(&children).is_none(), "{second:?}");
        }
    }

    #[test]
    fn test_preposition_needs_akkadogram_first() {
        let children = vec![
            XmlNode::from(XmlElement::new("sGr").with_child("EN")),
            " ".into(),
        ];
        assert!(akkadogram_preposition(&children).is_none());

        let children = vec![XmlNode::text("ANA"), " ".into()];
        assert!(akkadogram_preposition(&children).is_none());

        let children = vec![XmlNode::from(agr("ANA"))];
        assert!(akkadogram_preposition(&children).is_none());
    }

    #[test]
    fn test_prefixed_word_root_is_rejected() {
        let mut root = word().with_child("x");
        root.prefix = Some("tlh".to_string());
        let err = reconstruct_transliteration_for_word_node(&root).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedRoot {
                found: "tlh:w".to_string(),
                span: Span::default(),
            }
        );
    }

    #[test]
    fn test_preposition_without_following_node() {
        let w = word().with_child(agr("ANA")).with_child(" ");
        assert_eq!(reconstruct_transliteration_for_word_node(&w).unwrap(), "_ANA ");
    }

    #[test]
    fn test_double_space_renders_literally() {
        let w = word()
            .with_child(agr("ANA"))
            .with_child("  ")
            .with_child(XmlElement::new("sGr").with_child("EN"));
        assert_eq!(reconstruct_transliteration_for_word_node(&w).unwrap(), "_ANA  EN");
    }

    #[test]
    fn test_error_after_preposition_propagates() {
        let w = word()
            .with_child(agr("ANA"))
            .with_child(" ")
            .with_child(XmlElement::new("d").with_child("D"))
            .with_child(XmlElement::new("gap"));
        let err = reconstruct_transliteration_for_word_node(&w).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTag { ref tag, .. } if tag == "gap"));
    }
}
