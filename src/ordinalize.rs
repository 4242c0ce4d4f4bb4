use tracing::debug;

use crate::error::{MissingKey, OrdinalError, OrdinalResult};
use crate::provider::MessageProvider;
use crate::resolver::{Resolver, WordStrategy};
use crate::short::ShortRule;
use crate::spanish;
use crate::types::{Gender, LocaleId, OrdinalRequest, Plurality, Style};

/// Turns numbers into ordinals using the strings of a [`MessageProvider`].
///
/// Holds nothing but a shared reference, so one `Ordinalizer` can serve any
/// number of threads and locales.
///
/// ```
/// use ordinalize_full::{Gender, I18n, LocaleId, Ordinalizer, Plurality, Style};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let i18n = I18n::bundled()?;
/// let ordinalizer = Ordinalizer::new(&i18n);
/// let fr = LocaleId::new("fr")?;
/// let short = ordinalizer.ordinalize(1, Style::Short, Gender::Masculine, Plurality::Singular, &fr)?;
/// assert_eq!(short, "1er");
/// # Ok(())
/// # }
/// ```
pub struct Ordinalizer<'a, P: MessageProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: MessageProvider + ?Sized> Ordinalizer<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Ordinalizer { provider }
    }

    /// Ordinal of `number` in the requested style.
    ///
    /// # Errors
    /// [`OrdinalError::LocaleNotSupported`] when the locale lacks the
    /// translations (or, for the short style, the suffix rule) this number
    /// needs.
    pub fn ordinalize(
        &self,
        number: i64,
        style: Style,
        gender: Gender,
        plurality: Plurality,
        locale: &LocaleId,
    ) -> OrdinalResult<String> {
        match style {
            Style::Precedence | Style::Spatial => {
                self.word(number, style, gender, plurality, locale)
            }
            Style::Short => self.short(number, gender, plurality, locale),
        }
    }

    pub fn ordinalize_request(&self, request: &OrdinalRequest) -> OrdinalResult<String> {
        self.ordinalize(
            request.number,
            request.style,
            request.gender,
            request.plurality,
            &request.locale,
        )
    }

    pub fn ordinalize_precedence(
        &self,
        number: i64,
        gender: Gender,
        plurality: Plurality,
        locale: &LocaleId,
    ) -> OrdinalResult<String> {
        self.ordinalize(number, Style::Precedence, gender, plurality, locale)
    }

    pub fn ordinalize_spatial(
        &self,
        number: i64,
        gender: Gender,
        plurality: Plurality,
        locale: &LocaleId,
    ) -> OrdinalResult<String> {
        self.ordinalize(number, Style::Spatial, gender, plurality, locale)
    }

    fn word(
        &self,
        number: i64,
        style: Style,
        gender: Gender,
        plurality: Plurality,
        locale: &LocaleId,
    ) -> OrdinalResult<String> {
        let Some(namespace) = style.namespace() else {
            return Err(not_supported(locale));
        };
        let strategy = WordStrategy::for_language(locale.language());
        let resolver = Resolver::new(self.provider, locale);

        let word = resolver
            .resolve(strategy, namespace, number, gender)
            .map_err(|MissingKey { key }| {
                debug!(%locale, %key, "required translation missing");
                not_supported(locale)
            })?;

        Ok(match strategy {
            WordStrategy::Composed => spanish::inflect(&word, gender, plurality),
            WordStrategy::Gendered | WordStrategy::SpatialOnly => word,
        })
    }

    fn short(
        &self,
        number: i64,
        gender: Gender,
        plurality: Plurality,
        locale: &LocaleId,
    ) -> OrdinalResult<String> {
        let Some(rule) = ShortRule::for_language(locale.language()) else {
            debug!(%locale, "no short-style rule");
            return Err(not_supported(locale));
        };
        let suffix = rule.suffix(number, gender, || {
            self.word(number, Style::Precedence, gender, plurality, locale)
        })?;
        Ok(format!("{}{}", number, suffix))
    }
}

fn not_supported(locale: &LocaleId) -> OrdinalError {
    OrdinalError::LocaleNotSupported {
        locale: locale.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{I18n, LocalizedMessages};

    fn locale(tag: &str) -> LocaleId {
        LocaleId::new(tag).unwrap()
    }

    fn spanish_messages() -> LocalizedMessages {
        let mut messages = LocalizedMessages::new();
        messages
            .with_message("ordinalize_precedence.n_1", "primero")
            .with_message("ordinalize_precedence.n_2", "segundo")
            .with_message("ordinalize_precedence.n_3", "tercero")
            .with_message("ordinalize_precedence.n_10", "décimo")
            .with_message("ordinalize_precedence.n_20", "vigésimo")
            .with_message("ordinalize_spatial.n_2", "segundo");
        messages
    }

    #[test]
    fn test_spanish_gender_and_plural() {
        let messages = spanish_messages();
        let ordinalizer = Ordinalizer::new(&messages);
        let es = locale("es");

        let masculine = ordinalizer
            .ordinalize(2, Style::Precedence, Gender::Masculine, Plurality::Singular, &es)
            .unwrap();
        let feminine_plural = ordinalizer
            .ordinalize(2, Style::Precedence, Gender::Feminine, Plurality::Plural, &es)
            .unwrap();
        assert_eq!(masculine, "segundo");
        assert_eq!(feminine_plural, "segundas");
    }

    #[test]
    fn test_spanish_composed_and_truncated() {
        let messages = spanish_messages();
        let ordinalizer = Ordinalizer::new(&messages);
        let es = locale("es");

        assert_eq!(
            ordinalizer
                .ordinalize_precedence(23, Gender::Masculine, Plurality::Singular, &es)
                .unwrap(),
            "vigésimo tercer"
        );
        assert_eq!(
            ordinalizer
                .ordinalize_precedence(23, Gender::Feminine, Plurality::Singular, &es)
                .unwrap(),
            "vigésima tercera"
        );
        assert_eq!(
            ordinalizer
                .ordinalize_precedence(1, Gender::Masculine, Plurality::Singular, &es)
                .unwrap(),
            "primer"
        );
    }

    #[test]
    fn test_spanish_short_uses_precedence_word() {
        let messages = spanish_messages();
        let ordinalizer = Ordinalizer::new(&messages);
        let es = locale("es");

        let cases = [
            (1, Gender::Masculine, Plurality::Singular, "1.ᵉʳ"),
            (1, Gender::Feminine, Plurality::Singular, "1.ᵃ"),
            (2, Gender::Masculine, Plurality::Singular, "2.ᵒ"),
            (2, Gender::Masculine, Plurality::Plural, "2.ᵒˢ"),
            (2, Gender::Feminine, Plurality::Plural, "2.ᵃˢ"),
        ];
        for (number, gender, plurality, expected) in cases {
            assert_eq!(
                ordinalizer
                    .ordinalize(number, Style::Short, gender, plurality, &es)
                    .unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_spanish_short_missing_word_is_not_supported() {
        let messages = spanish_messages();
        let ordinalizer = Ordinalizer::new(&messages);
        let es = locale("es");
        let result =
            ordinalizer.ordinalize(7, Style::Short, Gender::Masculine, Plurality::Singular, &es);
        assert_eq!(
            result,
            Err(OrdinalError::LocaleNotSupported {
                locale: "es".to_string()
            })
        );
    }

    #[test]
    fn test_missing_key_becomes_locale_not_supported() {
        let mut messages = LocalizedMessages::new();
        messages.with_message("ordinalize_precedence.n_1", "premier");
        let ordinalizer = Ordinalizer::new(&messages);
        let fr = locale("fr");

        let result = ordinalizer.ordinalize_precedence(2, Gender::Masculine, Plurality::Singular, &fr);
        assert_eq!(
            result,
            Err(OrdinalError::LocaleNotSupported {
                locale: "fr".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_locale_fails_for_every_style() {
        let i18n = I18n::new();
        let ordinalizer = Ordinalizer::new(&i18n);
        let pt = locale("pt");

        for style in [Style::Precedence, Style::Spatial, Style::Short] {
            let result =
                ordinalizer.ordinalize(1, style, Gender::Masculine, Plurality::Singular, &pt);
            assert_eq!(
                result,
                Err(OrdinalError::LocaleNotSupported {
                    locale: "pt".to_string()
                }),
                "style {}",
                style
            );
        }
    }

    #[test]
    fn test_short_needs_no_translations() {
        let i18n = I18n::new();
        let ordinalizer = Ordinalizer::new(&i18n);

        assert_eq!(
            ordinalizer
                .ordinalize(21, Style::Short, Gender::Masculine, Plurality::Singular, &locale("en"))
                .unwrap(),
            "21st"
        );
        assert_eq!(
            ordinalizer
                .ordinalize(2, Style::Short, Gender::Feminine, Plurality::Singular, &locale("de"))
                .unwrap(),
            "2te"
        );
    }

    #[test]
    fn test_precedence_falls_back_to_spatial_for_other_locales() {
        let mut messages = LocalizedMessages::new();
        messages.with_message("ordinalize_spatial.n_1", "first");
        let ordinalizer = Ordinalizer::new(&messages);
        let en = locale("en");

        assert_eq!(
            ordinalizer
                .ordinalize_precedence(1, Gender::Masculine, Plurality::Singular, &en)
                .unwrap(),
            "first"
        );
    }

    #[test]
    fn test_request_dispatch() {
        let messages = spanish_messages();
        let ordinalizer = Ordinalizer::new(&messages);
        let request = OrdinalRequest::new(2, locale("es"))
            .with_style(Style::Spatial)
            .with_gender(Gender::Feminine);
        assert_eq!(ordinalizer.ordinalize_request(&request).unwrap(), "segunda");
    }
}
