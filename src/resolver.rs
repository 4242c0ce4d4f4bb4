//! Translation key resolution for the word styles
//!
//! Each locale strategy is an ordered list of candidate keys: the first key
//! the provider knows wins, and a miss on the last (required) key is fatal.

use tracing::{debug, trace};

use crate::error::MissingKey;
use crate::provider::MessageProvider;
use crate::types::{Gender, LocaleId, SPATIAL_NAMESPACE};

/// How word-style ordinals are looked up for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStrategy {
    /// `n_<number>_<gender>`, falling back to `n_<number>` (fr, de)
    Gendered,
    /// `n_<number>`, else composed from tens and units (es)
    Composed,
    /// Always `ordinalize_spatial.n_<number>`, whatever the requested style
    SpatialOnly,
}

impl WordStrategy {
    pub fn for_language(language: &str) -> Self {
        match language {
            "fr" | "de" => WordStrategy::Gendered,
            "es" => WordStrategy::Composed,
            _ => WordStrategy::SpatialOnly,
        }
    }
}

/// Build `<namespace>.n_<number>[_<gender>]`
pub fn translation_key(namespace: &str, number: i64, gender: Option<Gender>) -> String {
    match gender {
        Some(gender) => format!("{}.n_{}_{}", namespace, number, gender.as_str()),
        None => format!("{}.n_{}", namespace, number),
    }
}

pub(crate) struct Resolver<'a, P: MessageProvider + ?Sized> {
    provider: &'a P,
    locale: &'a LocaleId,
}

impl<'a, P: MessageProvider + ?Sized> Resolver<'a, P> {
    pub fn new(provider: &'a P, locale: &'a LocaleId) -> Self {
        Resolver { provider, locale }
    }

    /// Absent keys are not an error here; the caller falls back.
    /// An empty translation counts as absent.
    fn optional(&self, key: &str) -> Option<&'a str> {
        let value = self
            .provider
            .lookup(self.locale, key)
            .filter(|value| !value.is_empty());
        if value.is_some() {
            trace!(locale = %self.locale, key, "translation hit");
        }
        value
    }

    fn required(&self, key: &str) -> Result<&'a str, MissingKey> {
        self.optional(key).ok_or_else(|| MissingKey {
            key: key.to_string(),
        })
    }

    /// `preferred` is optional, `fallback` is required
    fn either(&self, preferred: &str, fallback: &str) -> Result<&'a str, MissingKey> {
        if let Some(value) = self.optional(preferred) {
            return Ok(value);
        }
        debug!(locale = %self.locale, key = preferred, "no translation, falling back");
        self.required(fallback)
    }

    /// Resolve the base word for `number` in `namespace`.
    ///
    /// For [`WordStrategy::Composed`] the result is the uninflected Spanish
    /// word; gender and plurality are applied afterwards.
    pub fn resolve(
        &self,
        strategy: WordStrategy,
        namespace: &str,
        number: i64,
        gender: Gender,
    ) -> Result<String, MissingKey> {
        match strategy {
            WordStrategy::Gendered => {
                self.either(
                    &translation_key(namespace, number, Some(gender)),
                    &translation_key(namespace, number, None),
                )
                .map(str::to_string)
            }
            WordStrategy::Composed => {
                let direct_key = translation_key(namespace, number, None);
                if let Some(value) = self.optional(&direct_key) {
                    return Ok(value.to_string());
                }
                let units = number.rem_euclid(10);
                let Some(tens) = number.div_euclid(10).checked_mul(10) else {
                    return Err(MissingKey { key: direct_key });
                };
                debug!(
                    locale = %self.locale,
                    number, tens, units, "composing ordinal from tens and units"
                );
                let tens_word = self.required(&translation_key(namespace, tens, None))?;
                let units_word = self.required(&translation_key(namespace, units, None))?;
                Ok(format!("{} {}", tens_word, units_word))
            }
            WordStrategy::SpatialOnly => {
                if namespace != SPATIAL_NAMESPACE {
                    debug!(
                        locale = %self.locale,
                        requested = namespace,
                        "no {} data for this locale, using {}",
                        namespace,
                        SPATIAL_NAMESPACE
                    );
                }
                self.required(&translation_key(SPATIAL_NAMESPACE, number, None))
                    .map(str::to_string)
            }
        }
    }
}
