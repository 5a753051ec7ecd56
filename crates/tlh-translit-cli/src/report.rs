//! Error and result output for the CLI.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use serde::Serialize;
use tlh_xml::Span;

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct WordRecord<'a> {
    pub file: &'a str,
    pub start: Option<usize>,
    pub end: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl<'a> WordRecord<'a> {
    pub fn success(file: &'a str, span: Span, transliteration: &'a str) -> Self {
        Self {
            file,
            start: Some(span.start),
            end: Some(span.end),
            transliteration: Some(transliteration),
            error: None,
            code: None,
        }
    }

    pub fn failure(file: &'a str, span: Option<Span>, code: &'static str, message: String) -> Self {
        Self {
            file,
            start: span.map(|s| s.start),
            end: span.map(|s| s.end),
            transliteration: None,
            error: Some(message),
            code: Some(code),
        }
    }
}

/// An error to show against the source it was found in.
pub struct Located<'a> {
    pub code: &'static str,
    pub message: String,
    pub span: Option<Span>,
    /// Label attached to the span.
    pub label: &'a str,
}

/// Render an error with source context.
///
/// Spans are byte offsets into `source`. Errors without a span are rendered
/// as a single `error[code]: message` line.
pub fn render_error(name: &str, source: &str, error: &Located<'_>, color: bool) -> String {
    let Some(span) = error.span else {
        return format!("error[{}]: {}\n", error.code, error.message);
    };

    let range = span.range();
    let mut out = Vec::new();

    let written = Report::build(ReportKind::Error, name.to_string(), range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_code(error.code)
        .with_message(&error.message)
        .with_label(
            Label::new((name.to_string(), range))
                .with_message(error.label)
                .with_color(Color::Red),
        )
        .finish()
        .write((name.to_string(), Source::from(source.to_string())), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // The span does not fit the source; fall back to the plain form.
        Err(_) => format!("error[{}]: {}\n", error.code, error.message),
    }
}
