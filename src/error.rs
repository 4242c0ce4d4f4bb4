use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the ordinalization entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrdinalError {
    /// The locale has no data (or no rule) for the requested number and style
    #[error("Unknown locale {locale}")]
    LocaleNotSupported { locale: String },
    /// The locale tag could not be parsed as a BCP-47 identifier
    #[error("Invalid locale '{locale}': {reason}")]
    InvalidLocale { locale: String, reason: String },
}

/// Result type for ordinalization
pub type OrdinalResult<T> = Result<T, OrdinalError>;

/// A required translation key was absent from the provider.
///
/// Never leaves the crate: the dispatcher turns it into
/// [`OrdinalError::LocaleNotSupported`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing translation for key '{key}'")]
pub(crate) struct MissingKey {
    pub key: String,
}

/// Errors raised while reading translation files from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON from '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid JSON in '{}': root must be an object", path.display())]
    InvalidRoot { path: PathBuf },
    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("Invalid filename: {}", path.display())]
    InvalidFileName { path: PathBuf },
}
