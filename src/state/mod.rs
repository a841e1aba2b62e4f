//! Explorer state: search routing, search history and persisted settings.
//!
//! - [`search`] - Query classification and the history-recording router
//! - [`history`] - Bounded search history and its stores
//! - [`config`] - Persistent configuration (selected network)
//! - [`paths`] - Platform directories for the files above
//!
//! # Example
//!
//! ```ignore
//! use rubixscan::state::{FileHistoryStore, SearchRouter, AppPaths};
//!
//! let router = SearchRouter::new(FileHistoryStore::from_paths(&AppPaths::new())?);
//! let target = router.route_text("did:rubix:abc", None)?;
//! println!("{}", target.route_path);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod history;
pub mod paths;
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use history::{FileHistoryStore, HistoryStore, MemoryHistoryStore, SearchHistory};
pub use paths::AppPaths;
pub use search::{
    AUTO_DETECT_RULES, ClassifiedTarget, DetectionRule, ResourceKind, SearchHint, SearchQuery,
    SearchRouter, classify, detect_resource_kind,
};
