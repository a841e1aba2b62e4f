//! Platform-specific locations for configuration and search history.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/rubixscan` | `~/.local/share/rubixscan` |
//! | macOS | `~/Library/Application Support/rubixscan` | Same as config |
//! | Windows | `%APPDATA%/rubixscan` | `%APPDATA%/rubixscan` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "rubixscan";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Search history file name.
pub const HISTORY_FILE_NAME: &str = "history.json";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories and files for the current platform.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Creates a new `AppPaths` instance with the default application name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        let mut path = self.config_dir()?;
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Returns the path to the search history file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn history_file(&self) -> Result<PathBuf> {
        let mut path = self.data_dir()?;
        path.push(HISTORY_FILE_NAME);
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
