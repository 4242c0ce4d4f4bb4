//! Ordinal words compiled into the crate
//!
//! Covers 1–10 for every bundled locale; Spanish also has the tens up to
//! 100 so any number below 100 can be composed.

use std::path::Path;

use crate::I18n;
use crate::error::LoadError;
use crate::loader::parse_messages;

const BUNDLED_LOCALES: &[(&str, &str)] = &[
    ("de", include_str!("../locales/de.json")),
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
    ("fr", include_str!("../locales/fr.json")),
    ("it", include_str!("../locales/it.json")),
    ("nl", include_str!("../locales/nl.json")),
];

/// Locale codes with bundled data
pub fn bundled_locales() -> impl Iterator<Item = &'static str> {
    BUNDLED_LOCALES.iter().map(|(locale, _)| *locale)
}

impl I18n {
    /// A store pre-filled with the bundled ordinal words
    ///
    /// # Errors
    /// Only if a bundled file is malformed.
    pub fn bundled() -> Result<Self, LoadError> {
        let mut i18n = I18n::new();
        for (locale, content) in BUNDLED_LOCALES {
            let origin = format!("locales/{}.json", locale);
            let messages = parse_messages(content, Path::new(&origin))?;
            i18n.with_messages_for_locale(locale, messages);
        }
        Ok(i18n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_parses() {
        let i18n = I18n::bundled().unwrap();
        for locale in bundled_locales() {
            assert!(
                i18n.messages_for_locale(locale).is_some(),
                "missing bundled locale {}",
                locale
            );
        }
    }

    #[test]
    fn test_bundled_has_no_metadata_keys() {
        let i18n = I18n::bundled().unwrap();
        for locale in bundled_locales() {
            let messages = i18n.messages_for_locale(locale).unwrap();
            assert!(
                messages.get_messages().keys().all(|key| !key.starts_with('@')),
                "metadata leaked into {}",
                locale
            );
        }
    }
}
