//! Application settings
/// Settings file loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    AppSettings,
    ConfigError,
    ValidationError,
};
