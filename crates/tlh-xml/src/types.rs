//! Core tree types for span-tracked XML.

use std::borrow::Cow;
use std::ops::Range;

/// A byte range into the source the tree was parsed from.
///
/// Trees built in code (rather than parsed) use `Span::default()`, the empty
/// range at offset zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    /// The root element of the document.
    pub root: XmlElement,

    /// Span of the entire document.
    pub span: Span,
}

/// A node in the tree.
///
/// The set of node kinds is closed: every consumer can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(XmlText),
    Comment(XmlComment),
}

/// An XML element with its attributes and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// The local name of the element (without namespace prefix). Tag
    /// lookups go through [`XmlElement::qualified_name`].
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// Attributes in source order.
    pub attributes: Vec<XmlAttribute>,

    /// Children in document order. Whitespace-only text is kept.
    pub children: Vec<XmlNode>,

    /// Span of the entire element, from `<` of the start tag to `>` of the end tag.
    pub span: Span,
}

/// An XML attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlAttribute {
    /// The local name of the attribute (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// The attribute value (after unescaping XML entities).
    pub value: String,

    /// Span of the attribute name.
    pub span: Span,
}

/// Character data, after entity unescaping.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlText {
    pub content: String,
    pub span: Span,
}

/// An XML comment. Carries no meaning for consumers beyond its presence.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlComment {
    pub content: String,
    pub span: Span,
}

impl XmlDocument {
    pub fn new(root: XmlElement, span: Span) -> Self {
        Self { root, span }
    }
}

impl XmlNode {
    /// Create a text node with no source span.
    pub fn text(content: impl Into<String>) -> Self {
        XmlNode::Text(XmlText {
            content: content.into(),
            span: Span::default(),
        })
    }

    /// Create a comment node with no source span.
    pub fn comment(content: impl Into<String>) -> Self {
        XmlNode::Comment(XmlComment {
            content: content.into(),
            span: Span::default(),
        })
    }

    pub fn is_element(&self) -> bool {
        matches!(self, XmlNode::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, XmlNode::Text(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, XmlNode::Comment(_))
    }

    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The content of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(&text.content),
            _ => None,
        }
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}

impl From<&str> for XmlNode {
    fn from(content: &str) -> Self {
        XmlNode::text(content)
    }
}

impl From<String> for XmlNode {
    fn from(content: String) -> Self {
        XmlNode::text(content)
    }
}

impl XmlElement {
    /// Create an empty element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            attributes: Vec::new(),
            children: Vec::new(),
            span: Span::default(),
        }
    }

    /// Add an attribute, keeping source order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(XmlAttribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: impl Into<XmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<XmlNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The name as written in the source, `prefix:local` or just `local`.
    pub fn qualified_name(&self) -> Cow<'_, str> {
        qualified_name(self.prefix.as_deref(), &self.name)
    }

    /// Check the qualified name of this element.
    ///
    /// `<x:w>` does not match `"w"`.
    pub fn has_name(&self, name: &str) -> bool {
        matches_qualified(self.prefix.as_deref(), &self.name, name)
    }

    /// Get an attribute value by qualified name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.has_name(name))
            .map(|a| a.value.as_str())
    }

    /// Direct child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// All elements named `name` at any depth below (and including) this one,
    /// in document order.
    ///
    /// A matching element is not searched further, so nested matches are not
    /// reported twice.
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }

    /// Concatenated content of all text descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlNode::Element(element) => out.push_str(&element.text_content()),
                XmlNode::Text(text) => out.push_str(&text.content),
                XmlNode::Comment(_) => {}
            }
        }
        out
    }
}

fn collect_named<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    if element.has_name(name) {
        found.push(element);
        return;
    }
    for child in element.child_elements() {
        collect_named(child, name, found);
    }
}

impl XmlAttribute {
    /// Create an attribute with no source span.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            value: value.into(),
            span: Span::default(),
        }
    }

    /// Check the qualified name of this attribute.
    pub fn has_name(&self, name: &str) -> bool {
        matches_qualified(self.prefix.as_deref(), &self.name, name)
    }
}

fn qualified_name<'a>(prefix: Option<&str>, local: &'a str) -> Cow<'a, str> {
    match prefix {
        Some(prefix) => Cow::Owned(format!("{prefix}:{local}")),
        None => Cow::Borrowed(local),
    }
}

fn matches_qualified(prefix: Option<&str>, local: &str, name: &str) -> bool {
    match prefix {
        Some(prefix) => name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|rest| rest == local),
        None => local == name,
    }
}
