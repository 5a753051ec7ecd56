//! Node renderer: turns one node and its subtree into transliteration text.

use crate::error::{Error, Result};
use crate::tags::WordTag;
use tlh_xml::{XmlElement, XmlNode};

/// Whether a Sumerogram that does not open its word gets a leading `-`.
///
/// Off: the target orthography writes no dash there.
const SUMEROGRAM_LEADING_DASH: bool = false;

/// Render a node and its subtree.
///
/// `is_first_child` tells a direct child of the word that it opens the word
/// (or follows an Akkadogram preposition). It is not passed further down:
/// children of this node are always rendered as non-initial.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTag`] for the first element, at any depth,
/// whose tag is not a [`WordTag`].
pub fn render_node(node: &XmlNode, is_first_child: bool) -> Result<String> {
    match node {
        XmlNode::Comment(_) => Ok(String::new()),
        XmlNode::Text(text) => Ok(text.content.clone()),
        XmlNode::Element(element) => render_element(element, is_first_child),
    }
}

fn render_element(element: &XmlElement, is_first_child: bool) -> Result<String> {
    // Content is rendered before the tag is looked at, so unsupported tags
    // inside a delimiter are still reported.
    let inner = render_children(&element.children)?;

    let name = element.qualified_name();
    let tag = WordTag::from_name(&name).ok_or_else(|| Error::UnsupportedTag {
        tag: name.into_owned(),
        span: element.span,
    })?;

    let rendered = match tag {
        WordTag::DeletionStart => "[".to_string(),
        WordTag::DeletionEnd => "]".to_string(),
        WordTag::LesionStart => "⸢".to_string(),
        WordTag::LesionEnd => "⸣".to_string(),
        WordTag::ErasureStart | WordTag::ErasureEnd => "*".to_string(),
        WordTag::Akkadogram => format!("_{inner}"),
        WordTag::Sumerogram => {
            if SUMEROGRAM_LEADING_DASH && !is_first_child {
                format!("-{inner}")
            } else {
                inner
            }
        }
        WordTag::Determinative => format!("°{inner}°"),
        WordTag::Numeral => inner,
        WordTag::Correction => attribute(element, "c").to_string(),
        WordTag::Note => format!("{{F: {}}}", attribute(element, "c")),
        WordTag::Subscript => format!("|{}", attribute(element, "c")),
    };

    Ok(rendered)
}

/// Render nodes in order as non-initial children and concatenate them.
pub(crate) fn render_children(children: &[XmlNode]) -> Result<String> {
    let mut out = String::new();
    for child in children {
        out.push_str(&render_node(child, false)?);
    }
    Ok(out)
}

fn attribute<'a>(element: &'a XmlElement, name: &str) -> &'a str {
    element.get_attribute(name).unwrap_or_default()
}
