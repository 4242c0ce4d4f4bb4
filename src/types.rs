use std::fmt;
use std::str::FromStr;

use icu_locale::Locale;
use serde::{Deserialize, Serialize};

use crate::error::OrdinalError;

/// Output style of an ordinal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Ranking word form, e.g. "premier"
    #[default]
    Precedence,
    /// Positional word form, may differ lexically from precedence
    Spatial,
    /// Numeral followed by a symbolic suffix, e.g. "1st", "1°"
    Short,
}

impl Style {
    /// Translation namespace of the word styles. `Short` has no namespace.
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            Style::Precedence => Some(PRECEDENCE_NAMESPACE),
            Style::Spatial => Some(SPATIAL_NAMESPACE),
            Style::Short => None,
        }
    }
}

pub const PRECEDENCE_NAMESPACE: &str = "ordinalize_precedence";
pub const SPATIAL_NAMESPACE: &str = "ordinalize_spatial";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    /// Suffix used in gendered translation keys (`n_1_feminine`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plurality {
    #[default]
    Singular,
    Plural,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Precedence => "precedence",
            Style::Spatial => "spatial",
            Style::Short => "short",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plurality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plurality::Singular => write!(f, "singular"),
            Plurality::Plural => write!(f, "plural"),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "precedence" => Ok(Style::Precedence),
            "spatial" => Ok(Style::Spatial),
            "short" => Ok(Style::Short),
            other => Err(format!(
                "Unknown style '{}' (expected precedence, spatial or short)",
                other
            )),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "masculine" | "m" => Ok(Gender::Masculine),
            "feminine" | "f" => Ok(Gender::Feminine),
            other => Err(format!(
                "Unknown gender '{}' (expected masculine or feminine)",
                other
            )),
        }
    }
}

impl FromStr for Plurality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singular" => Ok(Plurality::Singular),
            "plural" => Ok(Plurality::Plural),
            other => Err(format!(
                "Unknown plurality '{}' (expected singular or plural)",
                other
            )),
        }
    }
}

/// A parsed locale identifier.
///
/// Strategy selection only looks at the language subtag, so `fr-CA` and
/// `fr` behave the same. The full tag is still handed to the provider so a
/// regional data set can take precedence over the language one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleId(Locale);

impl LocaleId {
    pub fn new(tag: &str) -> Result<Self, OrdinalError> {
        tag.parse()
    }

    /// Language subtag, e.g. `"fr"` for `fr-CA`
    pub fn language(&self) -> &str {
        self.0.id.language.as_str()
    }

    pub fn locale(&self) -> &Locale {
        &self.0
    }
}

impl FromStr for LocaleId {
    type Err = OrdinalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let locale: Locale = s.parse().map_err(|e| OrdinalError::InvalidLocale {
            locale: s.to_string(),
            reason: format!("{}", e),
        })?;
        Ok(LocaleId(locale))
    }
}

impl From<Locale> for LocaleId {
    fn from(locale: Locale) -> Self {
        LocaleId(locale)
    }
}

impl TryFrom<String> for LocaleId {
    type Error = OrdinalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocaleId> for String {
    fn from(locale: LocaleId) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ordinalization call: a number plus the options that shape its form.
///
/// Defaults to precedence style, masculine, singular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalRequest {
    pub number: i64,
    pub locale: LocaleId,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub plurality: Plurality,
}

impl OrdinalRequest {
    pub fn new(number: i64, locale: LocaleId) -> Self {
        OrdinalRequest {
            number,
            locale,
            style: Style::default(),
            gender: Gender::default(),
            plurality: Plurality::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_plurality(mut self, plurality: Plurality) -> Self {
        self.plurality = plurality;
        self
    }
}
