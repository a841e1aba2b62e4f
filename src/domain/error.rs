//! Error types for Rubix explorer operations.
//!
//! Classification and normalization never fail; everything that can go wrong
//! lives at the edges (user input and the explorer API) and is described here.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error raised while building a search or fetching data from the explorer API.
///
/// The rendering side surfaces every variant as a "not found / failed to load"
/// state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// The API answered with a non-success status.
    #[error("Request for '{id}' failed with HTTP status {status}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// The identifier that was requested.
        id: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found on the network.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "token", "did").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FetchError {
    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new status error for the given identifier.
    #[must_use]
    pub fn status(status: u16, id: impl Into<String>) -> Self {
        Self::Status {
            status,
            id: id.into(),
        }
    }

    /// Create a new parse error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to parse
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report`, keeping the display message.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
