//! Span-tracked XML trees for TLH transliteration documents.
//!
//! This crate wraps [`quick-xml`] to build an immutable tree of [`XmlNode`]s
//! (elements, text, comments) where every node remembers the byte range it was
//! parsed from. Trees can also be assembled in code with the builder methods
//! on [`XmlElement`], which is how most tests construct words.
//!
//! # Example
//!
//! ```rust
//! use tlh_xml::{parse, XmlElement, XmlNode};
//!
//! let parsed = parse(r#"<w><aGr>I-NA</aGr></w>"#).unwrap();
//!
//! let built = XmlElement::new("w").with_child(XmlElement::new("aGr").with_child("I-NA"));
//!
//! assert_eq!(parsed.root.name, built.name);
//! assert_eq!(parsed.root.text_content(), built.text_content());
//! ```
//!
//! Text is never trimmed and comments are kept, so consumers see exactly the
//! children the document contains.

pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::parse;
pub use types::{Span, XmlAttribute, XmlComment, XmlDocument, XmlElement, XmlNode, XmlText};
