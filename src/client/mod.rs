//! HTTP clients for the Rubix explorer API.

pub mod http;
pub mod rubix;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use rubix::RubixClient;
