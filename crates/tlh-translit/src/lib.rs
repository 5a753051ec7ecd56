//! Reconstruct flat transliteration strings from TLH word markup.
//!
//! A transliterated word is edited as a small XML tree: a `<w>` element whose
//! children mix plain text with Akkadograms, Sumerograms, determinatives,
//! damage markers and editorial annotations. This crate linearizes such a
//! tree into the conventional one-line transliteration, encoding the markup
//! as punctuation (`_` for Akkadian, `°…°` for determinatives, `[`/`]` for
//! damage, `⸢`/`⸣` for lesions, and so on).
//!
//! # Overview
//!
//! - [`reconstruct_transliteration_for_word_node`]: the entry point for one
//!   `<w>` element.
//! - [`render_node`]: renders any node of a word and its subtree.
//! - [`WordTag`]: the closed set of tags a word may contain. Any other tag is
//!   an [`Error::UnsupportedTag`].
//! - [`reconstruct_word_xml`] and [`reconstruct_document`]: conveniences over
//!   XML text and whole documents.
//!
//! # Example
//!
//! ```rust
//! use tlh_translit::reconstruct_transliteration_for_word_node;
//! use tlh_xml::XmlElement;
//!
//! let word = XmlElement::new("w")
//!     .with_child(XmlElement::new("aGr").with_child("IN-BI"))
//!     .with_child(XmlElement::new("d").with_child("ḪI.A"))
//!     .with_child("-ia");
//!
//! let transliteration = reconstruct_transliteration_for_word_node(&word).unwrap();
//! assert_eq!(transliteration, "_IN-BI°ḪI.A°-ia");
//! ```
//!
//! Rendering is pure: the tree is only read, and nothing is logged. Errors
//! are returned to the caller, which owns reporting.

pub mod document;
pub mod error;
pub mod render;
pub mod tags;
pub mod word;

pub use document::{WordTransliteration, reconstruct_document, reconstruct_word_xml};
pub use error::{Error, Result};
pub use render::render_node;
pub use tags::{WORD_TAG, WordTag};
pub use word::reconstruct_transliteration_for_word_node;
