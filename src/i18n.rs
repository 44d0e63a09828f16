//! Localization store for the two supported locales.
//!
//! Translation tables are authored as nested JSON under `locales/`, embedded at
//! build time and flattened into `namespace.key` lookups. The [`Localizer`] owns
//! the active locale, persists it through a [`PreferenceStore`] and mirrors it to
//! the document language attribute.

/// Flattened translation tables
pub mod catalog;
/// Document-level attributes read by assistive technology
mod document;
/// Locale-layer errors
mod error;
/// Supported locale tags
mod locale;
/// Durable key-value stores for the locale preference
pub mod storage;
/// The localization store itself
mod store;

pub use catalog::{
    Catalog,
    SymmetryReport,
    TranslationTable,
};
pub use document::DocumentRoot;
pub use error::I18nError;
pub use locale::Locale;
pub use storage::{
    FileStore,
    MemoryStore,
    PreferenceStore,
};
pub use store::Localizer;
