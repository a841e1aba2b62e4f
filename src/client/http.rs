//! HTTP client construction for explorer API requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::{POOL_IDLE_TIMEOUT, POOL_MAX_IDLE_PER_HOST, REQUEST_TIMEOUT};
use crate::domain::FetchError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// How long idle pooled connections are kept
    pub pool_idle_timeout: Duration,
    /// Maximum idle pooled connections per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            pool_idle_timeout: POOL_IDLE_TIMEOUT,
            pool_max_idle_per_host: POOL_MAX_IDLE_PER_HOST,
        }
    }
}

impl HttpConfig {
    /// Build a pooled `reqwest` client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientInit` if the client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn build_client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(self.pool_idle_timeout)
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::client_init(e.to_string()))
    }
}
