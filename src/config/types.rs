use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::Locale;

/// Longest accepted simulated chat delay.
const MAX_CHAT_RESPONSE_DELAY_MS: u64 = 60_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeStorageKey")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Application settings read from `.mahila-maitri.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Locale code used when no preference was stored yet.
    pub default_locale: String,

    /// Key of the locale preference in the preference store.
    pub locale_storage_key: String,

    /// Directory of the durable preference file.
    ///
    /// - `None`: preferences live in memory for the session (default)
    /// - `Some(dir)`: preferences are written to `dir/preferences.json`
    pub storage_dir: Option<PathBuf>,

    /// Delay before the simulated chat backend replies.
    pub chat_response_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::En.code().to_string(),
            locale_storage_key: "mahilamaitri-language".to_string(),
            storage_dir: None,
            chat_response_delay_ms: 2000,
        }
    }
}

impl AppSettings {
    /// # Errors
    /// - Unknown default locale
    /// - Required field is empty
    /// - Chat delay out of range
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if Locale::from_str(&self.default_locale).is_err() {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("Unknown locale '{}'. Supported locales: \"en\", \"hi\"", self.default_locale),
            ));
        }

        if self.locale_storage_key.is_empty() {
            errors.push(ValidationError::new(
                "localeStorageKey",
                "The storage key cannot be empty. Example: \"mahilamaitri-language\"",
            ));
        }

        if self.chat_response_delay_ms > MAX_CHAT_RESPONSE_DELAY_MS {
            errors.push(ValidationError::new(
                "chatResponseDelayMs",
                format!(
                    "The delay must not exceed {MAX_CHAT_RESPONSE_DELAY_MS} ms, got {}",
                    self.chat_response_delay_ms
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Default locale, falling back to the primary locale when unparsable.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        Locale::from_str(&self.default_locale).unwrap_or_default()
    }

    #[must_use]
    pub const fn chat_response_delay(&self) -> Duration {
        Duration::from_millis(self.chat_response_delay_ms)
    }
}
