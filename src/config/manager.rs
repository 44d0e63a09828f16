use std::path::Path;

use super::{
    AppSettings,
    ConfigError,
    loader,
};

/// Holds the validated application settings.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings in effect, always valid
    current_settings: AppSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the settings file in `dir`, or use the defaults
    /// when there is no directory or no file.
    ///
    /// The new settings replace the current ones only if they validate.
    ///
    /// # Errors
    /// - The settings file cannot be read or parsed
    /// - Validation errors
    pub fn load_settings(&mut self, dir: Option<&Path>) -> Result<(), ConfigError> {
        let settings = match dir {
            Some(dir) => loader::load_from_dir(dir)?.unwrap_or_default(),
            None => AppSettings::default(),
        };
        self.update_settings(settings)
    }

    /// Replace the settings after validating them.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] and keeps the old settings.
    pub fn update_settings(&mut self, settings: AppSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings in effect: {:?}", settings);
        self.current_settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &AppSettings {
        &self.current_settings
    }
}
