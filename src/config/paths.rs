//! Path management for Monthwise
//!
//! ## Path Resolution Order
//!
//! 1. `MONTHWISE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/monthwise` on Linux,
//!    `~/Library/Application Support/monthwise` on macOS, `%APPDATA%\monthwise`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::MonthwiseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONTHWISE_DATA_DIR";

/// Manages all paths used by Monthwise
#[derive(Debug, Clone)]
pub struct MonthwisePaths {
    /// Base directory for settings and exports
    base_dir: PathBuf,
}

impl MonthwisePaths {
    /// Create a new MonthwisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, MonthwiseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MonthwisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), MonthwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonthwiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            MonthwiseError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MonthwiseError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| MonthwiseError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("monthwise"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonthwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = MonthwisePaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonthwisePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
