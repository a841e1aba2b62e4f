//! Application constants for rubixscan.
//!
//! Route paths, search limits and request timeouts shared across modules.

use std::time::Duration;

// ============================================================================
// Search Constants
// ============================================================================

/// Maximum accepted length of a search query, in characters.
pub const MAX_QUERY_LEN: usize = 100;

/// Number of entries kept in the search history.
pub const HISTORY_CAPACITY: usize = 10;

/// Literal prefix of Rubix decentralized identifiers.
pub const DID_PREFIX: &str = "did:rubix:";

/// Token id prefixes recognized by auto-detection (each followed by `-`).
pub const TOKEN_PREFIXES: [&str; 4] = ["RBT", "FT", "NFT", "SC"];

/// Minimum length of a `0x`-prefixed transaction hash.
pub const MIN_HEX_TX_LEN: usize = 40;

/// Queries longer than this fall back to the transaction view.
pub const LONG_QUERY_LEN: usize = 20;

// ============================================================================
// Route Paths
// ============================================================================

/// Explorer view for decentralized identifiers.
pub const DID_EXPLORER_PATH: &str = "/did-explorer";

/// Explorer view for tokens.
pub const TOKEN_EXPLORER_PATH: &str = "/token-explorer";

/// Explorer view for transactions and blocks.
pub const TRANSACTION_EXPLORER_PATH: &str = "/transaction-explorer";

// ============================================================================
// HTTP Constants
// ============================================================================

/// Timeout applied to every explorer API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How long idle pooled connections are kept.
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum idle pooled connections per host.
pub const POOL_MAX_IDLE_PER_HOST: usize = 4;
