//! Known-false-positive whitelist.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CheckerError;

/// One whitelist entry: an exact pattern, optionally scoped to a context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistEntry {
    /// The flagged text this entry suppresses; matched exactly.
    pub pattern: String,
    /// When set, the entry applies only to units containing this string.
    pub context: Option<String>,
}

impl WhitelistEntry {
    /// Creates an unscoped entry.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            context: None,
        }
    }

    /// Creates a context-scoped entry.
    pub fn with_context(pattern: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            context: Some(context.into()),
        }
    }
}

/// Read-only store of whitelist entries, loaded once per run.
///
/// The file format is line-oriented: one pattern per line, optionally
/// followed by a tab and a context string. `#` starts a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<WhitelistEntry>,
}

impl Whitelist {
    /// Creates an empty whitelist.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a whitelist from entries.
    pub fn from_entries(entries: Vec<WhitelistEntry>) -> Self {
        Self { entries }
    }

    /// Loads a whitelist file.
    ///
    /// A line whose pattern half is empty while a context is present is
    /// malformed: it would silently suppress nothing, which hides a typo in
    /// the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let mut entries = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let (pattern, context) = match line.split_once('\t') {
                Some((pattern, context)) => (pattern.trim(), Some(context.trim())),
                None => (line.trim(), None),
            };

            if pattern.is_empty() {
                return Err(CheckerError::invalid_rule(
                    format!("{}:{}", path.display(), line_no + 1),
                    "whitelist entry has an empty pattern",
                ));
            }

            entries.push(WhitelistEntry {
                pattern: pattern.to_string(),
                context: context.filter(|c| !c.is_empty()).map(str::to_string),
            });
        }

        debug!("Loaded {} whitelist entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when a finding with this original text, inside this unit
    /// text, is a known false positive.
    ///
    /// Matching is exact and case-sensitive: the original must equal the
    /// entry pattern, and a scoped entry additionally requires its context
    /// to occur in the unit text.
    pub fn matches(&self, original: &str, unit_text: &str) -> bool {
        self.entries.iter().any(|entry| {
            entry.pattern == original
                && entry
                    .context
                    .as_deref()
                    .is_none_or(|context| unit_text.contains(context))
        })
    }
}
