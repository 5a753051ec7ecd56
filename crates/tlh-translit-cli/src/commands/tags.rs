//! Tags command implementation: list the supported tag vocabulary.

use std::fmt::Write;

use tlh_translit::WordTag;

/// Format the tag table, one tag per line.
pub fn table() -> String {
    let mut out = String::new();
    for tag in WordTag::ALL {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<10} {:<22} {}",
            tag.name(),
            tag.description(),
            tag.rule()
        );
    }
    out
}

/// Execute the tags command
pub fn execute() {
    print!("{}", table());
}
