//! User settings for the punch-board calculator
//!
//! Manages user preferences: logging verbosity and result display options.

use serde::{Deserialize, Serialize};

use super::paths::PunchBoardPaths;
use crate::error::PunchBoardError;

/// Logging preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Result display preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplaySettings {
    /// Always render measurements as mixed-number fractions as well
    #[serde(default)]
    pub fractions: bool,
}

/// User settings for the calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Logging preferences
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Result display preferences
    #[serde(default)]
    pub display: DisplaySettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            logging: LoggingSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PunchBoardPaths) -> Result<Self, PunchBoardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PunchBoardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PunchBoardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PunchBoardPaths) -> Result<(), PunchBoardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PunchBoardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PunchBoardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.display.fractions);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.logging.level = "debug".to_string();
        settings.display.fractions = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.logging.level, "debug");
        assert!(loaded.display.fractions);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(
            paths.settings_file(),
            r#"{"logging": {"level": "info"}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.logging.level, "info");
        assert_eq!(loaded.schema_version, 1);
        assert!(!loaded.display.fractions);
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PunchBoardError::Config(_)));
    }
}
