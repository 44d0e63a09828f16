use thiserror::Error;

use super::Locale;

/// Errors raised by the localization layer
#[derive(Error, Debug)]
pub enum I18nError {
    /// A locale code outside the supported set
    #[error("Unknown locale '{0}'. Supported locales: en, hi")]
    UnknownLocale(String),

    /// A translation table whose root is not a JSON object
    #[error("Translation table for '{0}' must be a JSON object")]
    InvalidTable(Locale),

    /// Failure reading or writing the preference store
    #[error("Failed to access preference store: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed translation or preference JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
