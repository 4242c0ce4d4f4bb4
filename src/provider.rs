//! Read contract for translated strings
//!
//! The ordinalization core never owns translation data. It queries a
//! [`MessageProvider`] with fully built keys such as
//! `ordinalize_precedence.n_1_feminine` and treats `None` as "not found".

use crate::types::LocaleId;
use crate::{I18n, LocalizedMessages};

/// Key→string lookup for one locale at a time.
///
/// Implementations must be safe for concurrent reads; the core only ever
/// takes shared references.
pub trait MessageProvider: Send + Sync {
    /// Look up `key` for `locale`. Keys are matched exactly and
    /// case-sensitively.
    fn lookup(&self, locale: &LocaleId, key: &str) -> Option<&str>;
}

/// A single-locale table answers for every locale it is asked about.
impl MessageProvider for LocalizedMessages {
    fn lookup(&self, _locale: &LocaleId, key: &str) -> Option<&str> {
        self.get_message(key).map(String::as_str)
    }
}

/// Tries the full locale tag first (`fr-ca`), then its language (`fr`).
impl MessageProvider for I18n {
    fn lookup(&self, locale: &LocaleId, key: &str) -> Option<&str> {
        let tag = locale.to_string().to_lowercase();
        if let Some(message) = self
            .messages_for_locale(&tag)
            .and_then(|messages| messages.get_message(key))
        {
            return Some(message.as_str());
        }

        let language = locale.language();
        if language == tag {
            return None;
        }
        self.messages_for_locale(language)
            .and_then(|messages| messages.get_message(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_messages_ignores_locale() {
        let mut messages = LocalizedMessages::new();
        messages.with_message("ordinalize_spatial.n_1", "first");

        let en = LocaleId::new("en").unwrap();
        let ja = LocaleId::new("ja").unwrap();
        assert_eq!(messages.lookup(&en, "ordinalize_spatial.n_1"), Some("first"));
        assert_eq!(messages.lookup(&ja, "ordinalize_spatial.n_1"), Some("first"));
        assert_eq!(messages.lookup(&en, "ordinalize_spatial.n_2"), None);
    }

    #[test]
    fn test_i18n_prefers_regional_messages() {
        let mut fr = LocalizedMessages::new();
        fr.with_message("ordinalize_spatial.n_1", "premier");
        fr.with_message("ordinalize_spatial.n_2", "deuxième");
        let mut fr_ca = LocalizedMessages::new();
        fr_ca.with_message("ordinalize_spatial.n_1", "premier (CA)");

        let mut i18n = I18n::new();
        i18n.with_messages_for_locale("fr", fr)
            .with_messages_for_locale("fr-CA", fr_ca);

        let locale = LocaleId::new("fr-CA").unwrap();
        assert_eq!(
            i18n.lookup(&locale, "ordinalize_spatial.n_1"),
            Some("premier (CA)")
        );
        assert_eq!(
            i18n.lookup(&locale, "ordinalize_spatial.n_2"),
            Some("deuxième")
        );
    }

    #[test]
    fn test_i18n_lookup_is_case_sensitive() {
        let mut en = LocalizedMessages::new();
        en.with_message("ordinalize_spatial.n_1", "first");
        let mut i18n = I18n::new();
        i18n.with_messages_for_locale("en", en);

        let locale = LocaleId::new("en").unwrap();
        assert_eq!(i18n.lookup(&locale, "ORDINALIZE_SPATIAL.N_1"), None);
    }

    #[test]
    fn test_i18n_unknown_locale() {
        let i18n = I18n::new();
        let locale = LocaleId::new("pt").unwrap();
        assert_eq!(i18n.lookup(&locale, "ordinalize_spatial.n_1"), None);
    }
}
