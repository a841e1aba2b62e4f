//! Rubix explorer API client.
//!
//! # Example
//!
//! ```ignore
//! use rubixscan::client::RubixClient;
//! use rubixscan::domain::NetworkConfig;
//!
//! let client = RubixClient::from_config(&NetworkConfig::default())?;
//! let info = client.lookup("RBT-abc").await?;
//! ```

use reqwest::Client;

use super::http::HttpConfig;
use crate::domain::{FetchError, NetworkConfig};

mod lookup;

#[cfg(test)]
mod tests;

// ============================================================================
// Rubix API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct RubixClient {
    /// The explorer API base URL, without trailing slash.
    pub(crate) api_url: String,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl RubixClient {
    /// Creates a client for the selected network, built-in or custom.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientInit` if the HTTP client fails to initialize.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, FetchError> {
        Self::with_api_url(config.api_url(), &HttpConfig::default())
    }

    /// Creates a client for an arbitrary API base URL.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientInit` if the HTTP client fails to initialize.
    pub fn with_api_url(api_url: &str, http: &HttpConfig) -> Result<Self, FetchError> {
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client: http.build_client()?,
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// URL of the identifier lookup endpoint for `id`.
    #[must_use]
    pub fn search_url(&self, id: &str) -> String {
        format!("{}/search?id={}", self.api_url, urlencoding::encode(id))
    }

    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("accept", "application/json")
    }
}
