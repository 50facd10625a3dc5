//! Path management for the punch-board calculator
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `PBC_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pbc` or `~/.config/pbc`
//! 3. Windows: `%APPDATA%\pbc`

use std::path::PathBuf;

use crate::error::PunchBoardError;

/// Manages all paths used by the calculator
#[derive(Debug, Clone)]
pub struct PunchBoardPaths {
    /// Base directory for all configuration
    base_dir: PathBuf,
}

impl PunchBoardPaths {
    /// Create a new PunchBoardPaths instance
    ///
    /// Path resolution:
    /// 1. `PBC_CONFIG_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/pbc` or `~/.config/pbc`
    /// 3. Windows: `%APPDATA%\pbc`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PunchBoardError> {
        let base_dir = if let Ok(custom) = std::env::var("PBC_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PunchBoardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the config directory (~/.config/pbc/ or equivalent)
    pub fn config_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), PunchBoardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PunchBoardError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PunchBoardError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PunchBoardError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pbc"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PunchBoardError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PunchBoardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pbc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("pbc");
        let paths = PunchBoardPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PunchBoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());

        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
