//! Word command implementation: reconstruct one `<w>` given on the command line.

use anyhow::Result;
use tracing::debug;

use crate::report::{Located, render_error};
use tlh_translit::reconstruct_word_xml;

/// Name under which the inline markup appears in error reports.
const SOURCE_NAME: &str = "<word>";

/// Execute the word command
pub fn execute(markup: &str, color: bool) -> Result<()> {
    debug!(markup, "reconstructing inline word");

    match reconstruct_word_xml(markup) {
        Ok(transliteration) => {
            println!("{}", transliteration);
            Ok(())
        }
        Err(error) => {
            let located = Located {
                code: error.code(),
                message: error.to_string(),
                span: error.span(),
                label: "here",
            };
            eprint!("{}", render_error(SOURCE_NAME, markup, &located, color));
            anyhow::bail!("the word could not be reconstructed")
        }
    }
}
