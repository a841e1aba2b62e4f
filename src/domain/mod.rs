//! Domain types for the rubixscan explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for input validation and API fetches
//! - [`network`] - Network configuration (MainNet, TestNet, LocalNet, custom)
//! - [`token`] - Token information and lookup payload normalization

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod network;
pub mod token;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::FetchError;
pub use network::{CustomNetwork, Network, NetworkConfig};
pub use token::{FtInfo, NftInfo, RbtInfo, ScInfo, TokenInfo, TokenType, normalize};
