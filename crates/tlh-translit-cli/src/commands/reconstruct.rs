//! Reconstruct command implementation.
//!
//! Reads TLH XML documents, finds every `<w>` element and prints its
//! transliteration, one word per line.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::report::{Located, WordRecord, render_error};
use tlh_translit::reconstruct_document;

/// Arguments for the reconstruct command
#[derive(Debug)]
pub struct ReconstructArgs {
    /// Input files; empty or `-` reads stdin
    pub files: Vec<PathBuf>,
    /// Emit JSON lines instead of plain text
    pub json: bool,
    /// Continue after a word fails
    pub keep_going: bool,
    /// Colored error reports
    pub color: bool,
}

/// Execute the reconstruct command
pub fn execute(args: ReconstructArgs) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let failures = run(&args, &mut stdout.lock(), &mut stderr.lock())?;

    if failures > 0 {
        anyhow::bail!("{} word(s) could not be reconstructed", failures);
    }
    Ok(())
}

/// Process all inputs, writing results to `out` and error reports to `err`.
///
/// Returns the number of failures. Without `keep_going`, processing stops at
/// the first failure.
pub fn run(args: &ReconstructArgs, out: &mut impl Write, err: &mut impl Write) -> Result<usize> {
    let inputs: Vec<Option<&Path>> = if args.files.is_empty() {
        vec![None]
    } else {
        args.files
            .iter()
            .map(|path| (path.as_os_str() != "-").then_some(path.as_path()))
            .collect()
    };

    let mut failures = 0;

    for input in inputs {
        let (name, content) = read_input(input)?;
        info!(file = %name, "reconstructing words");

        let document = match tlh_xml::parse(&content) {
            Ok(document) => document,
            Err(error) => {
                warn!(file = %name, %error, "could not parse document");
                let located = Located {
                    code: error.code(),
                    message: error.to_string(),
                    span: error.span(),
                    label: "here",
                };
                report_failure(args, &name, &content, &located, out, err)?;
                failures += 1;
                if !args.keep_going {
                    return Ok(failures);
                }
                continue;
            }
        };

        let words = reconstruct_document(&document);
        debug!(
            file = %name,
            words = words.len(),
            root = %document.root.qualified_name(),
            bytes = document.span.len(),
            "found words"
        );

        for word in &words {
            match &word.result {
                Ok(transliteration) => {
                    if args.json {
                        let record = WordRecord::success(&name, word.span, transliteration);
                        writeln!(out, "{}", serde_json::to_string(&record)?)?;
                    } else {
                        writeln!(out, "{}", transliteration)?;
                    }
                }
                Err(error) => {
                    warn!(file = %name, code = error.code(), %error, "could not reconstruct word");
                    let located = Located {
                        code: error.code(),
                        message: error.to_string(),
                        // Errors from trees without spans point at the whole word.
                        span: error.span().or(Some(word.span)),
                        label: "cannot be transliterated",
                    };
                    report_failure(args, &name, &content, &located, out, err)?;
                    failures += 1;
                    if !args.keep_going {
                        return Ok(failures);
                    }
                }
            }
        }
    }

    Ok(failures)
}

fn report_failure(
    args: &ReconstructArgs,
    name: &str,
    content: &str,
    error: &Located<'_>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if args.json {
        let record = WordRecord::failure(name, error.span, error.code, error.message.clone());
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    } else {
        write!(err, "{}", render_error(name, content, error, args.color))?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), content))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(("<stdin>".to_string(), content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<text>
  <lb lnr="1"/>
  <w><del_in/><aGr>A-NA</aGr></w>
  <w><aGr>ME-E</aGr><gap/></w>
  <w>ap<corr c="!"/>-pa-an</w>
</text>
"#;

    fn write_document(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(file: &Path, json: bool, keep_going: bool) -> ReconstructArgs {
        ReconstructArgs {
            files: vec![file.to_path_buf()],
            json,
            keep_going,
            color: false,
        }
    }

    fn run_to_strings(args: &ReconstructArgs) -> (usize, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = run(args, &mut out, &mut err).unwrap();
        (
            failures,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_stops_at_first_failure() {
        let file = write_document(DOCUMENT);
        let (failures, out, err) = run_to_strings(&args(file.path(), false, false));

        assert_eq!(failures, 1);
        assert_eq!(out, "[_A-NA\n");
        assert!(err.contains("T-1-2"), "{err}");
    }

    #[test]
    fn test_keep_going_reports_every_word() {
        let file = write_document(DOCUMENT);
        let (failures, out, _) = run_to_strings(&args(file.path(), false, true));

        assert_eq!(failures, 1);
        assert_eq!(out, "[_A-NA\nap!-pa-an\n");
    }

    #[test]
    fn test_json_lines() {
        let file = write_document("<w><aGr>ANA</aGr> <d>D</d></w>");
        let (failures, out, err) = run_to_strings(&args(file.path(), true, false));

        assert_eq!(failures, 0);
        assert!(err.is_empty());
        let record: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(record["transliteration"], "_ANA °D°");
        assert_eq!(record["start"], 0);
        assert_eq!(record["end"], 30);
    }

    #[test]
    fn test_json_failure_record() {
        let file = write_document("<w><gap/></w>");
        let (failures, out, _) = run_to_strings(&args(file.path(), true, false));

        assert_eq!(failures, 1);
        let record: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(record["code"], "T-1-2");
        assert_eq!(record["start"], 3);
        assert!(record.get("transliteration").is_none());
    }

    #[test]
    fn test_unparsable_document() {
        let file = write_document("<text><w></text>");
        let (failures, out, err) = run_to_strings(&args(file.path(), false, true));

        assert_eq!(failures, 1);
        assert!(out.is_empty());
        assert!(err.contains("X-1-"), "{err}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let args = args(Path::new("/nonexistent/words.xml"), false, false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(&args, &mut out, &mut err);
        assert!(result.is_err());
    }
}
