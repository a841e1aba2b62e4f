//! Bounded search history with pluggable persistence.
//!
//! The history keeps the most recent queries first, never holds the same
//! string twice and never grows past [`HISTORY_CAPACITY`] entries. Storage is
//! reached through [`HistoryStore`] so routing can be exercised without
//! touching the filesystem.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::paths::AppPaths;
use crate::constants::HISTORY_CAPACITY;

// ============================================================================
// SearchHistory
// ============================================================================

/// Most-recent-first list of past search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries ordered most recent first.
    ///
    /// Later duplicates are dropped and the result is cut to capacity.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for entry in entries {
            let entry = entry.into();
            if history.entries.len() == HISTORY_CAPACITY {
                break;
            }
            if !history.entries.contains(&entry) {
                history.entries.push(entry);
            }
        }
        history
    }

    /// Records a query as the most recent entry.
    ///
    /// An equal entry already present moves to the front; the oldest entry
    /// is evicted once capacity is exceeded.
    pub fn push(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.entries.retain(|existing| existing != &query);
        self.entries.insert(0, query);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Returns the entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

// ============================================================================
// HistoryStore
// ============================================================================

/// Durable storage for the search history.
///
/// Implementations only need `load` and `save`; `append` and `clear` are
/// built on top of them.
pub trait HistoryStore {
    /// Loads the stored history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<SearchHistory>;

    /// Replaces the stored history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, history: &SearchHistory) -> Result<()>;

    /// Records `query` and returns the updated history.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    fn append(&self, query: &str) -> Result<SearchHistory> {
        let mut history = self.load()?;
        history.push(query);
        self.save(&history)?;
        Ok(history)
    }

    /// Removes every stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    fn clear(&self) -> Result<()> {
        self.save(&SearchHistory::new())
    }
}

// ============================================================================
// File Store
// ============================================================================

/// History persisted as a JSON array of strings.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform's default history location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn from_paths(paths: &AppPaths) -> Result<Self> {
        Ok(Self::new(paths.history_file()?))
    }
}

impl HistoryStore for FileHistoryStore {
    /// A missing file loads as empty, and so does a file that is not a JSON
    /// array of strings, so the next save replaces it.
    fn load(&self) -> Result<SearchHistory> {
        if !self.path.exists() {
            return Ok(SearchHistory::new());
        }
        let content = fs::read(&self.path)?;
        match serde_json::from_slice::<Vec<String>>(&content) {
            Ok(entries) => Ok(SearchHistory::from_entries(entries)),
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable search history at {}: {e}",
                    self.path.display()
                );
                Ok(SearchHistory::new())
            }
        }
    }

    /// Writes to a sibling temp file, then renames it over the history file.
    fn save(&self, history: &SearchHistory) -> Result<()> {
        let content = serde_json::to_string(history)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-process history store.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    history: Mutex<SearchHistory>,
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<SearchHistory> {
        let history = self
            .history
            .lock()
            .map_err(|_| color_eyre::eyre::eyre!("History lock poisoned"))?;
        Ok(history.clone())
    }

    fn save(&self, history: &SearchHistory) -> Result<()> {
        let mut stored = self
            .history
            .lock()
            .map_err(|_| color_eyre::eyre::eyre!("History lock poisoned"))?;
        *stored = history.clone();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
