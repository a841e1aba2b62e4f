//! Application configuration with persistence.
//!
//! [`AppConfig`] remembers the selected network and any custom networks the
//! user registered. It is stored as JSON at:
//! - Linux: `~/.config/rubixscan/config.json`
//! - macOS: `~/Library/Application Support/rubixscan/config.json`
//! - Windows: `%APPDATA%/rubixscan/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::paths::AppPaths;
use crate::domain::{CustomNetwork, Network, NetworkConfig};

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// The currently selected network.
    #[serde(default)]
    pub network: NetworkConfig,
    /// List of user-defined custom networks.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved or the file cannot be
    /// written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Registers a custom network without selecting it.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom network with the same name exists.
    pub fn add_custom_network(&mut self, network: CustomNetwork) -> Result<()> {
        if self.custom_networks.iter().any(|n| n.name == network.name) {
            return Err(color_eyre::eyre::eyre!(
                "Network '{}' already exists",
                network.name
            ));
        }
        self.custom_networks.push(network);
        Ok(())
    }

    /// Removes a custom network by name.
    ///
    /// Switches back to MainNet if the removed network was selected.
    ///
    /// # Errors
    ///
    /// Returns an error if no custom network has that name.
    pub fn delete_custom_network(&mut self, name: &str) -> Result<()> {
        let original_len = self.custom_networks.len();
        self.custom_networks.retain(|n| n.name != name);

        if self.custom_networks.len() == original_len {
            return Err(color_eyre::eyre::eyre!("Network '{}' not found", name));
        }

        if let NetworkConfig::Custom(ref current) = self.network
            && current.name == name
        {
            self.network = NetworkConfig::BuiltIn(Network::MainNet);
        }
        Ok(())
    }

    /// Selects a network by name: built-in names first, then custom ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the name matches no known network.
    pub fn select_network(&mut self, name: &str) -> Result<()> {
        if let Some(network) = Network::from_name(name) {
            self.network = NetworkConfig::BuiltIn(network);
            return Ok(());
        }
        let custom = self
            .custom_networks
            .iter()
            .find(|n| n.name == name)
            .cloned()
            .ok_or_else(|| color_eyre::eyre::eyre!("Network '{}' not found", name))?;
        self.network = NetworkConfig::Custom(custom);
        Ok(())
    }

    /// Returns all available networks (built-in + custom).
    #[must_use]
    pub fn all_networks(&self) -> Vec<NetworkConfig> {
        Network::ALL
            .into_iter()
            .map(NetworkConfig::BuiltIn)
            .chain(
                self.custom_networks
                    .iter()
                    .cloned()
                    .map(NetworkConfig::Custom),
            )
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
