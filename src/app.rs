//! Application context shared by the screens.
//!
//! The context is built once from [`AppSettings`] and passed by reference;
//! nothing in the crate reaches for a process-wide global.

use thiserror::Error;

use crate::backend::{
    SessionBackend,
    SimulatedChatBackend,
};
use crate::config::{
    AppSettings,
    ConfigError,
};
use crate::i18n::{
    Catalog,
    FileStore,
    I18nError,
    Localizer,
    MemoryStore,
    PreferenceStore,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Localization and service seams of a running application.
#[derive(Debug)]
pub struct AppContext {
    /// Validated settings the context was built from
    settings: AppSettings,
    /// Shared localization store
    localizer: Localizer,
    /// Receives vendor and health registrations
    registrations: SessionBackend,
    /// Answers support chat messages
    chat: SimulatedChatBackend,
}

impl AppContext {
    /// Build the context, storing the locale preference where `settings`
    /// points: a file under `storageDir`, or memory when unset.
    ///
    /// # Errors
    /// - Validation errors in `settings`
    /// - An embedded translation table fails to parse
    pub fn from_settings(settings: AppSettings) -> Result<Self, AppError> {
        let store: Box<dyn PreferenceStore> = match &settings.storage_dir {
            Some(dir) => {
                tracing::debug!("Persisting preferences under {:?}", dir);
                Box::new(FileStore::in_dir(dir))
            }
            None => Box::new(MemoryStore::new()),
        };
        Self::with_store(settings, store)
    }

    /// Build the context around an explicit preference store.
    ///
    /// # Errors
    /// - Validation errors in `settings`
    /// - An embedded translation table fails to parse
    pub fn with_store(
        settings: AppSettings,
        store: Box<dyn PreferenceStore>,
    ) -> Result<Self, AppError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let catalog = Catalog::builtin()?;
        let chat = SimulatedChatBackend::new(catalog.clone(), settings.chat_response_delay());
        let localizer = Localizer::new(
            catalog,
            store,
            settings.locale_storage_key.clone(),
            settings.default_locale(),
        );

        Ok(Self { settings, localizer, registrations: SessionBackend::new(), chat })
    }

    #[must_use]
    pub const fn settings(&self) -> &AppSettings {
        &self.settings
    }

    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub const fn localizer_mut(&mut self) -> &mut Localizer {
        &mut self.localizer
    }

    #[must_use]
    pub const fn registrations(&self) -> &SessionBackend {
        &self.registrations
    }

    #[must_use]
    pub const fn chat_backend(&self) -> &SimulatedChatBackend {
        &self.chat
    }
}
