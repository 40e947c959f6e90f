//! JSON file-backed response cache for expensive checkers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::RawIssue;

/// Memoizes checker results keyed by unit text.
///
/// Loaded once at construction, mutated in memory during the run, written
/// back with an explicit [`flush`](CheckCache::flush). A poisoned lock is
/// treated as a cache miss rather than a failure.
pub struct CheckCache {
    path: Option<PathBuf>,
    entries: Mutex<HashMap<String, Vec<RawIssue>>>,
}

impl CheckCache {
    /// Opens a cache backed by `path`, loading existing entries if present.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Discarding unreadable cache {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        debug!("Cache {}: {} entries", path.display(), entries.len());
        Self {
            path: Some(path),
            entries: Mutex::new(entries),
        }
    }

    /// Creates a cache that never touches disk (tests, one-off runs).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Looks up cached issues for a unit text.
    pub fn get(&self, text: &str) -> Option<Vec<RawIssue>> {
        self.entries.lock().ok()?.get(text).cloned()
    }

    /// Stores issues for a unit text.
    pub fn put(&self, text: &str, issues: Vec<RawIssue>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(text.to_string(), issues);
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the cache back to its file, if file-backed.
    pub fn flush(&self) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let entries = self
            .entries
            .lock()
            .map_err(|_| std::io::Error::other("cache lock poisoned"))?;
        let json = serde_json::to_string(&*entries)?;
        fs::write(path, json)
    }
}
