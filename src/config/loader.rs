use std::io::ErrorKind;
use std::path::Path;

use super::{
    AppSettings,
    ConfigError,
};

/// Name of the settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mahila-maitri.json";

/// Parse the settings file in `dir`; `Ok(None)` when there is none.
///
/// # Errors
/// - The file exists but cannot be read
/// - The file is not valid settings JSON
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<AppSettings>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No settings file at {:?}", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Read settings from {:?}", path);
    Ok(Some(serde_json::from_str(&content)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn reads_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"chatResponseDelayMs": 500}"#)
            .unwrap();

        let settings = load_from_dir(temp_dir.path()).unwrap();

        assert_eq!(settings.map(|s| s.chat_response_delay_ms), Some(500));
    }

    #[rstest]
    fn missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Ok(None)));
    }

    #[rstest]
    fn invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
