//! Symbolic ordinal suffixes ("1st", "2ème", "3°")

use crate::types::Gender;

/// Per-language rule for the short style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortRule {
    English,
    French,
    Italian,
    Dutch,
    /// Derived from the ending of the full Spanish word
    Spanish,
    German,
}

impl ShortRule {
    /// `None` for languages without a short-style rule
    pub fn for_language(language: &str) -> Option<Self> {
        match language {
            "en" => Some(ShortRule::English),
            "fr" => Some(ShortRule::French),
            "it" => Some(ShortRule::Italian),
            "nl" => Some(ShortRule::Dutch),
            "es" => Some(ShortRule::Spanish),
            "de" => Some(ShortRule::German),
            _ => None,
        }
    }

    /// Suffix for `number`.
    ///
    /// `full_word` is only called for Spanish, where the suffix mirrors the
    /// ending of the word form.
    pub fn suffix<E, F>(&self, number: i64, gender: Gender, full_word: F) -> Result<&'static str, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let suffix = match self {
            ShortRule::English => english_suffix(number),
            ShortRule::French => {
                if number == 1 {
                    "er"
                } else {
                    "ème"
                }
            }
            ShortRule::Italian => "°",
            ShortRule::Dutch => dutch_suffix(number),
            ShortRule::Spanish => spanish_suffix(&full_word()?),
            ShortRule::German => match gender {
                Gender::Masculine => "ter",
                Gender::Feminine => "te",
            },
        };
        Ok(suffix)
    }
}

fn english_suffix(number: i64) -> &'static str {
    let abs = number.unsigned_abs();
    if (11..=13).contains(&(abs % 100)) {
        return "th";
    }
    match abs % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn dutch_suffix(number: i64) -> &'static str {
    let rem = number.rem_euclid(100);
    if matches!(rem, 0 | 1 | 8) || rem > 19 {
        "ste"
    } else {
        "de"
    }
}

/// Superscript abbreviation matching the ending of a Spanish ordinal word.
/// Unknown endings give an empty suffix.
pub fn spanish_suffix(word: &str) -> &'static str {
    if word.ends_with("er") {
        ".ᵉʳ"
    } else if word.ends_with('a') {
        ".ᵃ"
    } else if word.ends_with('o') {
        ".ᵒ"
    } else if word.ends_with("os") {
        ".ᵒˢ"
    } else if word.ends_with("as") {
        ".ᵃˢ"
    } else {
        ""
    }
}
