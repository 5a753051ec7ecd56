//! The closed vocabulary of tags that may appear inside a word.

/// Tag name of the word element itself.
pub const WORD_TAG: &str = "w";

/// Every element tag the renderer knows how to linearize.
///
/// Qualified element names are matched exactly (case-sensitive) against
/// [`WordTag::name`], so a namespaced `x:aGr` is not an Akkadogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordTag {
    /// Start of a damaged (destroyed) passage: `[`.
    DeletionStart,
    /// End of a damaged passage: `]`.
    DeletionEnd,
    /// Start of a lesion (partially preserved signs): `⸢`.
    LesionStart,
    /// End of a lesion: `⸣`.
    LesionEnd,
    /// Start of an erasure: `*`.
    ErasureStart,
    /// End of an erasure: `*`.
    ErasureEnd,
    /// Akkadogram: Akkadian written within the word.
    Akkadogram,
    /// Sumerogram: Sumerian logogram.
    Sumerogram,
    /// Determinative, a semantic classifier.
    Determinative,
    /// Numeral.
    Numeral,
    /// Editorial correction mark; text is in the `c` attribute.
    Correction,
    /// Footnote reference; text is in the `c` attribute.
    Note,
    /// Subscript annotation; text is in the `c` attribute.
    Subscript,
}

impl WordTag {
    /// All tags, in the order they are documented.
    pub const ALL: [WordTag; 13] = [
        WordTag::DeletionStart,
        WordTag::DeletionEnd,
        WordTag::LesionStart,
        WordTag::LesionEnd,
        WordTag::ErasureStart,
        WordTag::ErasureEnd,
        WordTag::Akkadogram,
        WordTag::Sumerogram,
        WordTag::Determinative,
        WordTag::Numeral,
        WordTag::Correction,
        WordTag::Note,
        WordTag::Subscript,
    ];

    /// Look up a tag by its element name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "del_in" => WordTag::DeletionStart,
            "del_fin" => WordTag::DeletionEnd,
            "laes_in" => WordTag::LesionStart,
            "laes_fin" => WordTag::LesionEnd,
            "ras_in" => WordTag::ErasureStart,
            "ras_fin" => WordTag::ErasureEnd,
            "aGr" => WordTag::Akkadogram,
            "sGr" => WordTag::Sumerogram,
            "d" => WordTag::Determinative,
            "num" => WordTag::Numeral,
            "corr" => WordTag::Correction,
            "note" => WordTag::Note,
            "subscr" => WordTag::Subscript,
            _ => return None,
        };
        Some(tag)
    }

    /// The element name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            WordTag::DeletionStart => "del_in",
            WordTag::DeletionEnd => "del_fin",
            WordTag::LesionStart => "laes_in",
            WordTag::LesionEnd => "laes_fin",
            WordTag::ErasureStart => "ras_in",
            WordTag::ErasureEnd => "ras_fin",
            WordTag::Akkadogram => "aGr",
            WordTag::Sumerogram => "sGr",
            WordTag::Determinative => "d",
            WordTag::Numeral => "num",
            WordTag::Correction => "corr",
            WordTag::Note => "note",
            WordTag::Subscript => "subscr",
        }
    }

    /// Human-readable rendering rule, as listed by `tlh-translit tags`.
    pub fn rule(self) -> &'static str {
        match self {
            WordTag::DeletionStart => "[",
            WordTag::DeletionEnd => "]",
            WordTag::LesionStart => "⸢",
            WordTag::LesionEnd => "⸣",
            WordTag::ErasureStart | WordTag::ErasureEnd => "*",
            WordTag::Akkadogram => "_ + content",
            WordTag::Sumerogram => "content",
            WordTag::Determinative => "° + content + °",
            WordTag::Numeral => "content",
            WordTag::Correction => "@c, or nothing",
            WordTag::Note => "{F: @c}",
            WordTag::Subscript => "| + @c",
        }
    }

    /// Short description of what the tag marks.
    pub fn description(self) -> &'static str {
        match self {
            WordTag::DeletionStart => "damage start",
            WordTag::DeletionEnd => "damage end",
            WordTag::LesionStart => "lesion start",
            WordTag::LesionEnd => "lesion end",
            WordTag::ErasureStart => "erasure start",
            WordTag::ErasureEnd => "erasure end",
            WordTag::Akkadogram => "Akkadogram",
            WordTag::Sumerogram => "Sumerogram",
            WordTag::Determinative => "determinative",
            WordTag::Numeral => "numeral",
            WordTag::Correction => "editorial correction",
            WordTag::Note => "footnote reference",
            WordTag::Subscript => "subscript annotation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tag in WordTag::ALL {
            assert_eq!(WordTag::from_name(tag.name()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_and_case_sensitive_names() {
        assert_eq!(WordTag::from_name("gap"), None);
        assert_eq!(WordTag::from_name("AGR"), None);
        assert_eq!(WordTag::from_name(WORD_TAG), None);
        assert_eq!(WordTag::from_name(""), None);
        assert_eq!(WordTag::from_name("x:aGr"), None);
    }
}
