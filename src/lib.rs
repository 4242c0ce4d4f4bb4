//! Locale-aware ordinal numbers.
//!
//! Turns an integer into an ordinal word ("première", "décimo tercer") or a
//! numeral with an ordinal suffix ("1st", "2ème", "3°"), with gender and
//! plurality agreement where the language needs it. Words come from a
//! [`MessageProvider`]; [`I18n::bundled`] ships a small default data set.
//!
//! ```
//! use ordinalize_full::{Gender, I18n, LocaleId, Ordinalizer, Plurality};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let i18n = I18n::bundled()?;
//! let ordinalizer = Ordinalizer::new(&i18n);
//! let es = LocaleId::new("es")?;
//! let word = ordinalizer.ordinalize_precedence(23, Gender::Feminine, Plurality::Plural, &es)?;
//! assert_eq!(word, "vigésima terceras");
//! # Ok(())
//! # }
//! ```
use std::collections::HashMap;
use std::path::Path;

pub mod bundled;
pub mod error;
pub mod loader;
pub mod ordinalize;
pub mod provider;
pub mod resolver;
pub mod short;
pub mod spanish;
pub mod types;


pub use bundled::bundled_locales;
pub use error::{LoadError, OrdinalError, OrdinalResult};
pub use loader::{load_all_messages_from_dir, load_messages_from_file};
pub use ordinalize::Ordinalizer;
pub use provider::MessageProvider;
pub use resolver::{WordStrategy, translation_key};
pub use short::ShortRule;
pub use types::{
    Gender, LocaleId, OrdinalRequest, PRECEDENCE_NAMESPACE, Plurality, SPATIAL_NAMESPACE, Style,
};

#[derive(Debug, Clone, Default)]
pub struct LocalizedMessages(pub HashMap<String, String>);
impl LocalizedMessages {
    pub fn new() -> Self {
        LocalizedMessages(HashMap::new())
    }
    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn get_messages(&self) -> &HashMap<String, String> {
        &self.0
    }
    /// Copy every message of `other` into `self`, replacing existing keys
    pub fn merge(&mut self, other: LocalizedMessages) -> &mut Self {
        self.0.extend(other.0);
        self
    }
}

/// Translated strings for any number of locales
#[derive(Debug, Clone, Default)]
pub struct I18n {
    // Keyed by lowercase locale and then by message key
    // e.g. messages["en"]["ordinalize_spatial.n_1"] = "first"
    //      messages["fr"]["ordinalize_precedence.n_1_feminine"] = "première"
    //      messages["es"]["ordinalize_precedence.n_20"] = "vigésimo"
    messages: HashMap<String, LocalizedMessages>,
}

impl I18n {
    pub fn new() -> Self {
        I18n {
            messages: HashMap::new(),
        }
    }

    /// Replace all messages of `locale`
    pub fn with_messages_for_locale(
        &mut self,
        locale: &str,
        messages: LocalizedMessages,
    ) -> &mut Self {
        self.messages.insert(locale.to_lowercase(), messages);
        self
    }

    pub fn add_message(&mut self, locale: &str, key: &str, message: &str) -> &mut Self {
        self.messages
            .entry(locale.to_lowercase())
            .or_default()
            .with_message(key, message);
        self
    }

    pub fn messages_for_locale(&self, locale: &str) -> Option<&LocalizedMessages> {
        self.messages.get(&locale.to_lowercase())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Merge every `<locale>.json` file of `dir` over the current messages
    ///
    /// # Errors
    /// See [`load_all_messages_from_dir`].
    pub fn load_dir(&mut self, dir: &Path) -> Result<&mut Self, LoadError> {
        for (locale, messages) in load_all_messages_from_dir(dir)? {
            self.messages.entry(locale).or_default().merge(messages);
        }
        Ok(self)
    }
}
