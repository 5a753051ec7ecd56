//! XML parser that builds [`XmlDocument`] trees.
//!
//! Unlike a data-oriented XML reader, this parser keeps every text node,
//! including whitespace-only ones between elements, and every comment. In
//! transliteration markup a lone space between two elements is content.

use crate::{
    Error, Result, Span, XmlAttribute, XmlComment, XmlDocument, XmlElement, XmlNode, XmlText,
};
use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

/// Parse XML from a string.
///
/// # Example
///
/// ```rust
/// use tlh_xml::parse;
///
/// let xml = parse("<w><aGr>ANA</aGr> <d>D</d></w>").unwrap();
/// assert_eq!(xml.root.name, "w");
/// assert_eq!(xml.root.children.len(), 3);
/// assert_eq!(xml.root.children[1].as_text(), Some(" "));
/// ```
///
/// # Errors
///
/// Returns an error if the XML is malformed, empty, or has more than one root.
pub fn parse(content: &str) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(content);
    parser.parse()
}

/// Internal parser state.
struct XmlParser<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    /// Elements opened but not yet closed.
    stack: Vec<BuildNode>,
}

/// An element being constructed during parsing.
struct BuildNode {
    name: String,
    prefix: Option<String>,
    attributes: Vec<XmlAttribute>,
    /// Byte offset of the `<` of the start tag.
    start_offset: usize,
    children: Vec<XmlNode>,
}

impl BuildNode {
    /// Tag name as written in the start tag.
    fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.clone(),
        }
    }
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            source,
            reader,
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            // Position before the event is where the event's markup begins.
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    self.handle_start(&e, event_start)?;
                }
                Ok(Event::End(e)) => {
                    let element = self.handle_end(&e)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let element = self.handle_empty(&e, event_start)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    self.handle_text(&e, event_start)?;
                }
                Ok(Event::CData(e)) => {
                    self.handle_cdata(&e, event_start);
                }
                Ok(Event::Comment(e)) => {
                    self.handle_comment(&e, event_start);
                }
                Ok(Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                    tracing::trace!(offset = event_start, "skipping XML declaration");
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    let position = self.reader.error_position() as usize;
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        span: Some(Span::new(position, position)),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.qualified_name()),
                span: Some(Span::new(node.start_offset, node.start_offset + 1)),
            });
        }

        let root = root.ok_or(Error::EmptyDocument)?;
        Ok(XmlDocument::new(root, Span::new(0, self.source.len())))
    }

    /// Append a finished element to its parent, or make it the document root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlNode::Element(element));
                Ok(())
            }
            None if root.is_some() => Err(Error::MultipleRoots {
                span: Some(element.span),
            }),
            None => {
                *root = Some(element);
                Ok(())
            }
        }
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<()> {
        let (name, prefix) = split_qualified_name(e.name().as_ref());
        let attributes = self.parse_attributes(e, event_start)?;

        self.stack.push(BuildNode {
            name,
            prefix,
            attributes,
            start_offset: event_start,
            children: Vec::new(),
        });

        Ok(())
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>) -> Result<XmlElement> {
        let end_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let end_offset = self.reader.buffer_position() as usize;

        let node = self.stack.pop().ok_or_else(|| Error::InvalidStructure {
            message: format!("Unexpected closing tag </{}>", end_name),
            span: Some(Span::new(end_offset, end_offset)),
        })?;

        let start_name = node.qualified_name();
        if start_name != end_name {
            return Err(Error::MismatchedEndTag {
                expected: start_name,
                found: end_name,
                span: Some(Span::new(node.start_offset, end_offset)),
            });
        }

        Ok(XmlElement {
            name: node.name,
            prefix: node.prefix,
            attributes: node.attributes,
            children: node.children,
            span: Span::new(node.start_offset, end_offset),
        })
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<XmlElement> {
        let (name, prefix) = split_qualified_name(e.name().as_ref());
        let attributes = self.parse_attributes(e, event_start)?;
        let end_offset = self.reader.buffer_position() as usize;

        Ok(XmlElement {
            name,
            prefix,
            attributes,
            children: Vec::new(),
            span: Span::new(event_start, end_offset),
        })
    }

    fn handle_text(&mut self, e: &BytesText<'_>, event_start: usize) -> Result<()> {
        let end_offset = self.reader.buffer_position() as usize;
        let span = Span::new(event_start, end_offset);

        let content = e
            .unescape()
            .map_err(|err| Error::XmlSyntax {
                message: format!("Invalid text content: {}", err),
                span: Some(span),
            })?
            .into_owned();

        match self.stack.last_mut() {
            Some(node) => node.children.push(XmlNode::Text(XmlText { content, span })),
            None if content.trim().is_empty() => {}
            None => {
                return Err(Error::InvalidStructure {
                    message: "Text outside of the root element".to_string(),
                    span: Some(span),
                });
            }
        }
        Ok(())
    }

    fn handle_cdata(&mut self, e: &BytesCData<'_>, event_start: usize) {
        let content = String::from_utf8_lossy(e.as_ref()).into_owned();
        let span = Span::new(event_start, self.reader.buffer_position() as usize);

        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlNode::Text(XmlText { content, span }));
        }
    }

    fn handle_comment(&mut self, e: &BytesText<'_>, event_start: usize) {
        let content = String::from_utf8_lossy(e).into_owned();
        let span = Span::new(event_start, self.reader.buffer_position() as usize);

        // Comments outside the root element are dropped.
        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlNode::Comment(XmlComment { content, span }));
        }
    }

    fn parse_attributes(&self, e: &BytesStart<'_>, tag_start: usize) -> Result<Vec<XmlAttribute>> {
        let mut attributes = Vec::new();

        // Raw tag text without the leading '<'.
        let tag_str = String::from_utf8_lossy(e.as_ref());
        let content_start = tag_start + 1;
        let mut search_from = e.name().as_ref().len();

        for attr_result in e.attributes() {
            let attr = attr_result?;

            let key = attr.key.as_ref();
            let (name, prefix) = split_qualified_name(key);
            let key_str = String::from_utf8_lossy(key);

            let value = attr.unescape_value().map_err(|err| Error::XmlSyntax {
                message: format!("Invalid attribute value: {}", err),
                span: Some(Span::new(tag_start, tag_start + 1)),
            })?;

            // Attributes appear in order, so searching forward from the previous
            // match finds this attribute's name rather than an earlier value.
            let span = match tag_str[search_from..].find(key_str.as_ref()) {
                Some(rel) => {
                    let start = search_from + rel;
                    search_from = start + key_str.len();
                    Span::new(content_start + start, content_start + start + key_str.len())
                }
                None => Span::new(tag_start, tag_start + 1),
            };

            attributes.push(XmlAttribute {
                name,
                prefix,
                value: value.into_owned(),
                span,
            });
        }

        Ok(attributes)
    }
}

/// Split `prefix:local` into the local name and optional prefix.
fn split_qualified_name(raw: &[u8]) -> (String, Option<String>) {
    let full_name = String::from_utf8_lossy(raw);

    match full_name.split_once(':') {
        Some((prefix, local)) => (local.to_string(), Some(prefix.to_string())),
        None => (full_name.into_owned(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let xml = parse("<w/>").unwrap();
        assert_eq!(xml.root.name, "w");
        assert!(xml.root.children.is_empty());
    }

    #[test]
    fn test_parse_nested_elements() {
        let xml = parse("<w><aGr>I-NA</aGr></w>").unwrap();
        assert_eq!(xml.root.children.len(), 1);

        let agr = xml.root.children[0].as_element().unwrap();
        assert_eq!(agr.name, "aGr");
        assert_eq!(agr.children[0].as_text(), Some("I-NA"));
    }

    #[test]
    fn test_whitespace_text_between_elements_is_kept() {
        let xml = parse("<w><aGr>ANA</aGr> <d>D</d></w>").unwrap();
        let kinds: Vec<bool> = xml.root.children.iter().map(XmlNode::is_text).collect();
        assert_eq!(kinds, vec![false, true, false]);
        assert_eq!(xml.root.children[1].as_text(), Some(" "));
    }

    #[test]
    fn test_double_space_is_not_collapsed() {
        let xml = parse("<w><aGr>ANA</aGr>  <d>D</d></w>").unwrap();
        assert_eq!(xml.root.children[1].as_text(), Some("  "));
    }

    #[test]
    fn test_comments_are_kept_as_nodes() {
        let xml = parse("<w>ap<!-- checked -->-pa-an</w>").unwrap();
        assert_eq!(xml.root.children.len(), 3);
        assert!(xml.root.children[1].is_comment());
        match &xml.root.children[1] {
            XmlNode::Comment(comment) => assert_eq!(comment.content, " checked "),
            other => panic!("expected comment, got {other:?}"),
        }
    }

    #[test]
    fn test_unicode_text_is_untouched() {
        let xml = parse("<w><aGr>QA-DU₄</aGr><d>ḪI.A</d></w>").unwrap();
        assert_eq!(xml.root.text_content(), "QA-DU₄ḪI.A");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = parse(r#"<w><corr c="&lt;!&gt;"/>a&amp;b</w>"#).unwrap();
        let corr = xml.root.children[0].as_element().unwrap();
        assert_eq!(corr.get_attribute("c"), Some("<!>"));
        assert_eq!(xml.root.children[1].as_text(), Some("a&b"));
    }

    #[test]
    fn test_cdata_becomes_text() {
        let xml = parse("<w><![CDATA[a<b]]></w>").unwrap();
        assert_eq!(xml.root.children[0].as_text(), Some("a<b"));
    }

    #[test]
    fn test_declaration_and_prefix() {
        let xml = parse(r#"<?xml version="1.0"?>
<tlh:w xmlns:tlh="urn:tlh">x</tlh:w>"#)
        .unwrap();
        assert_eq!(xml.root.qualified_name(), "tlh:w");
        assert!(!xml.root.has_name("w"));
        assert!(xml.root.get_attribute("xmlns:tlh").is_some());
    }

    #[test]
    fn test_end_tag_prefix_must_match() {
        let result = parse("<a:w>x</b:w>");
        assert!(
            matches!(
                result,
                Err(Error::MismatchedEndTag { .. } | Error::XmlSyntax { .. })
            ),
            "{result:?}"
        );
        assert!(parse("<a:w>x</a:w>").is_ok());
    }

    #[test]
    fn test_document_span_covers_declaration() {
        let content = "<?xml version=\"1.0\"?>\n<w>x</w>\n";
        let xml = parse(content).unwrap();

        assert_eq!(xml.span, Span::new(0, content.len()));
        assert_eq!(&content[xml.root.span.range()], "<w>x</w>");
    }

    #[test]
    fn test_element_spans() {
        let content = "<w><del_in/>x</w>";
        let xml = parse(content).unwrap();

        assert_eq!(xml.root.span, Span::new(0, content.len()));
        let del_in = xml.root.children[0].as_element().unwrap();
        assert_eq!(&content[del_in.span.range()], "<del_in/>");
        match &xml.root.children[1] {
            XmlNode::Text(text) => assert_eq!(&content[text.span.range()], "x"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_attribute_spans() {
        //              0123456789012345678
        let content = r#"<note n="3" c="n"/>"#;
        let xml = parse(content).unwrap();

        let [n, c] = &xml.root.attributes[..] else {
            panic!("expected two attributes, got {:?}", xml.root.attributes);
        };
        assert_eq!(n.span, Span::new(6, 7));
        // "c" must not match the 'n' value or the element name.
        assert_eq!(&content[c.span.range()], "c");
        assert_eq!(c.span.start, 12);
    }

    #[test]
    fn test_empty_document_error() {
        assert_eq!(parse(""), Err(Error::EmptyDocument));
        assert_eq!(parse("  \n"), Err(Error::EmptyDocument));
    }

    #[test]
    fn test_unclosed_element_error() {
        let result = parse("<w><aGr>");
        assert!(matches!(result, Err(Error::UnexpectedEof { .. })), "{result:?}");
    }

    #[test]
    fn test_mismatched_tags_error() {
        let result = parse("<w></aGr>");
        // quick-xml checks end names itself and reports them as syntax errors.
        assert!(
            matches!(
                result,
                Err(Error::MismatchedEndTag { .. } | Error::XmlSyntax { .. })
            ),
            "Expected MismatchedEndTag or XmlSyntax error, got: {:?}",
            result
        );
    }

    #[test]
    fn test_multiple_roots_error() {
        let result = parse("<w/><w/>");
        assert_eq!(
            result,
            Err(Error::MultipleRoots {
                span: Some(Span::new(4, 8))
            })
        );
    }

    #[test]
    fn test_text_outside_root_error() {
        let result = parse("<w/>stray");
        assert!(matches!(result, Err(Error::InvalidStructure { .. })), "{result:?}");
    }

    #[test]
    fn test_syntax_error() {
        let result = parse("<w c=unquoted/>");
        assert!(matches!(result, Err(Error::XmlSyntax { .. })), "{result:?}");
    }
}
