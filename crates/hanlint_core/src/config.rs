//! Run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hanlint_extract::SelectorConfig;

use crate::ProofError;

/// Checker names understood by [`build_checkers`](crate::build_checkers).
pub const KNOWN_CHECKERS: &[&str] = &["spelling", "spacing", "rule", "language-tool"];

/// Configuration for a proofreading run.
///
/// The `checkers` list doubles as the precedence order: when multiple
/// checkers agree on a span, the suggestion of the earliest listed checker
/// becomes the representative one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofConfig {
    /// Enabled checkers, highest precedence first.
    #[serde(default = "default_checkers")]
    pub checkers: Vec<String>,

    /// Minimum Hangul ratio for a unit to be checked (inclusive).
    #[serde(default = "default_korean_ratio")]
    pub korean_ratio: f64,

    /// Minimum unit length in characters.
    #[serde(default = "default_min_unit_chars")]
    pub min_unit_chars: usize,

    /// Native-extraction quality heuristic.
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Whether the OCR fallback may run at all.
    #[serde(default = "default_true")]
    pub ocr: bool,

    /// Per-checker, per-unit timeout in milliseconds; 0 disables the bound.
    #[serde(default = "default_checker_timeout_ms")]
    pub checker_timeout_ms: u64,

    /// Base URL of a LanguageTool-compatible server.
    #[serde(default)]
    pub language_tool_url: Option<String>,

    /// YAML rules file for the rule checker; built-ins are used when unset.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,

    /// Whitelist file of known false positives.
    #[serde(default)]
    pub whitelist_path: Option<PathBuf>,

    /// Response cache file for the LanguageTool checker.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Snippet length (characters) in reports.
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

fn default_checkers() -> Vec<String> {
    vec!["spelling".into(), "spacing".into(), "rule".into()]
}

fn default_korean_ratio() -> f64 {
    0.5
}

fn default_min_unit_chars() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_checker_timeout_ms() -> u64 {
    10_000
}

fn default_snippet_length() -> usize {
    60
}

impl ProofConfig {
    /// Config file names probed by [`discover`](Self::discover).
    pub const CONFIG_FILES: &'static [&'static str] = &[".hanlint.jsonc", ".hanlint.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            checkers: default_checkers(),
            korean_ratio: default_korean_ratio(),
            min_unit_chars: default_min_unit_chars(),
            selector: SelectorConfig::default(),
            ocr: true,
            checker_timeout_ms: default_checker_timeout_ms(),
            language_tool_url: None,
            rules_path: None,
            whitelist_path: None,
            cache_path: None,
            snippet_length: default_snippet_length(),
        }
    }

    /// Loads configuration from a JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProofError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ProofError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSONC string and validates it.
    pub fn from_json(json: &str) -> Result<Self, ProofError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| ProofError::config(format!("Invalid config: {}", e)))?
            .ok_or_else(|| ProofError::config("Empty config file"))?;

        let config: Self = serde_json::from_value(value)
            .map_err(|e| ProofError::config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Looks for a config file in the given directory.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Rejects configurations that would silently produce a useless report.
    pub fn validate(&self) -> Result<(), ProofError> {
        if self.checkers.is_empty() {
            return Err(ProofError::config(
                "no checkers enabled; the report would be empty",
            ));
        }

        for name in &self.checkers {
            if !KNOWN_CHECKERS.contains(&name.as_str()) {
                return Err(ProofError::config(format!(
                    "unknown checker '{}' (known: {})",
                    name,
                    KNOWN_CHECKERS.join(", ")
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.korean_ratio) {
            return Err(ProofError::config(format!(
                "korean_ratio must be within [0, 1], got {}",
                self.korean_ratio
            )));
        }

        if self.checkers.iter().any(|c| c == "language-tool") && self.language_tool_url.is_none() {
            return Err(ProofError::config(
                "language-tool checker enabled but language_tool_url is not set",
            ));
        }

        Ok(())
    }

    /// Precedence rank of a checker name; unlisted checkers rank last.
    pub fn precedence(&self, name: &str) -> usize {
        self.checkers
            .iter()
            .position(|c| c == name)
            .unwrap_or(self.checkers.len())
    }
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProofConfig::new();
        assert_eq!(config.checkers, vec!["spelling", "spacing", "rule"]);
        assert_eq!(config.korean_ratio, 0.5);
        assert_eq!(config.min_unit_chars, 10);
        assert!(config.ocr);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_with_comments() {
        let config = ProofConfig::from_json(
            r#"{
  // only the fast checkers
  "checkers": ["spacing", "rule"],
  "korean_ratio": 0.3,
}"#,
        )
        .unwrap();
        assert_eq!(config.checkers, vec!["spacing", "rule"]);
        assert_eq!(config.korean_ratio, 0.3);
        // Unspecified fields keep their defaults.
        assert_eq!(config.min_unit_chars, 10);
    }

    #[test]
    fn test_empty_checkers_rejected() {
        let result = ProofConfig::from_json(r#"{ "checkers": [] }"#);
        assert!(matches!(result, Err(ProofError::Config(_))));
    }

    #[test]
    fn test_unknown_checker_rejected() {
        let result = ProofConfig::from_json(r#"{ "checkers": ["grammar"] }"#);
        assert!(matches!(result, Err(ProofError::Config(_))));
    }

    #[test]
    fn test_language_tool_requires_url() {
        let result = ProofConfig::from_json(r#"{ "checkers": ["language-tool"] }"#);
        assert!(matches!(result, Err(ProofError::Config(_))));

        let config = ProofConfig::from_json(
            r#"{ "checkers": ["language-tool"], "language_tool_url": "http://localhost:8010" }"#,
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_ratio_bounds() {
        let result = ProofConfig::from_json(r#"{ "korean_ratio": 1.5 }"#);
        assert!(matches!(result, Err(ProofError::Config(_))));
    }

    #[test]
    fn test_precedence_order() {
        let config = ProofConfig::new();
        assert_eq!(config.precedence("spelling"), 0);
        assert_eq!(config.precedence("spacing"), 1);
        assert_eq!(config.precedence("rule"), 2);
        // Unlisted checkers rank after every listed one.
        assert_eq!(config.precedence("language-tool"), 3);
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProofConfig::discover(dir.path()).is_none());

        fs::write(dir.path().join(".hanlint.jsonc"), "{}").unwrap();
        let found = ProofConfig::discover(dir.path()).unwrap();
        assert!(found.ends_with(".hanlint.jsonc"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            ProofConfig::from_json("{ not json"),
            Err(ProofError::Config(_))
        ));
    }
}
