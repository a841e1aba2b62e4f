//! Network configuration for Rubix networks.
//!
//! This module defines the built-in Rubix networks, user-defined custom
//! networks, and the explorer API endpoint each of them resolves to.

use serde::{Deserialize, Serialize};

// ============================================================================
// Built-in Networks
// ============================================================================

/// Rubix network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[allow(clippy::enum_variant_names)]
pub enum Network {
    /// Rubix MainNet - the production network.
    #[default]
    MainNet,
    /// Rubix TestNet - the test network for development.
    TestNet,
    /// LocalNet - an explorer API served from a local node.
    LocalNet,
}

impl Network {
    /// All built-in networks in display order.
    pub const ALL: [Network; 3] = [Self::MainNet, Self::TestNet, Self::LocalNet];

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MainNet => "MainNet",
            Self::TestNet => "TestNet",
            Self::LocalNet => "LocalNet",
        }
    }

    /// Returns the explorer API base URL for this network.
    #[must_use]
    pub const fn api_url(&self) -> &'static str {
        match self {
            Self::MainNet => "https://rexplorer-api.rubix.network",
            Self::TestNet => "https://testnet-rexplorer-api.rubix.network",
            Self::LocalNet => "http://localhost:20000",
        }
    }

    /// Parses a network name case-insensitively (`mainnet`, `TestNet`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Custom Networks
// ============================================================================

/// A user-defined network pointing at an arbitrary explorer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name chosen by the user.
    pub name: String,
    /// Explorer API base URL.
    pub api_url: String,
}

impl CustomNetwork {
    /// Create a custom network, stripping any trailing slash from the URL.
    #[must_use]
    pub fn new(name: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            name: name.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

// ============================================================================
// Network Selection
// ============================================================================

/// The network the explorer talks to: either built-in or custom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkConfig {
    /// One of the built-in networks.
    BuiltIn(Network),
    /// A user-defined network.
    Custom(CustomNetwork),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::BuiltIn(Network::default())
    }
}

impl NetworkConfig {
    /// Returns the display name of the selected network.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.as_str(),
            Self::Custom(custom) => &custom.name,
        }
    }

    /// Returns the explorer API base URL of the selected network.
    #[must_use]
    pub fn api_url(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.api_url(),
            Self::Custom(custom) => &custom.api_url,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
