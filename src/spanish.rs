//! Gender and number agreement for Spanish ordinal words

use crate::types::{Gender, Plurality};

/// Inflect a masculine singular Spanish ordinal.
///
/// Steps run in a fixed order because the final truncation has to see the
/// gender and plural adjusted word:
///
/// 1. feminine: the last letter of every word becomes `a`
/// 2. plural: `s` is appended
/// 3. a trailing `ero` loses its last letter (`primero` → `primer`)
pub fn inflect(word: &str, gender: Gender, plurality: Plurality) -> String {
    let mut value = match gender {
        Gender::Feminine => feminize(word),
        Gender::Masculine => word.to_string(),
    };

    if plurality == Plurality::Plural {
        value.push('s');
    }

    if value.ends_with("ero") {
        value.pop();
    }

    value
}

fn feminize(word: &str) -> String {
    word.split_whitespace()
        .map(|part| {
            let mut chars = part.chars();
            chars.next_back();
            format!("{}a", chars.as_str())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
