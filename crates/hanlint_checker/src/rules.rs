//! Regex-rule checker with YAML-loadable rule definitions.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use hanlint_text::Span;

use crate::{Checker, CheckerError, RawIssue};

/// A rule definition as it appears in the rules file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Rule name, shown to the reviewer.
    pub name: String,
    /// Regex pattern to search for.
    pub pattern: String,
    /// Hint explaining what to review.
    #[serde(default)]
    pub hint: String,
    /// Optional concrete replacement for the matched text.
    #[serde(default)]
    pub replacement: Option<String>,
}

struct CompiledRule {
    name: String,
    pattern: Regex,
    hint: String,
    replacement: Option<String>,
}

/// Built-in rules used when no rules file is configured.
fn default_rules() -> Vec<RuleDefinition> {
    [
        ("되/돼", r"되요|됬", "문맥에 맞는 되/돼 확인", None),
        ("안/않", r"안(되|돼)", "부정(안) vs 보조용언(않) 점검", None),
        ("'것 같다' 띄어쓰기", r"것같", "'것 같다'로 띄어쓰기", Some("것 같")),
        ("수+단위 띄어쓰기", r"[0-9]+[가-힣]", "숫자와 단위 사이 띄어쓰기 확인", None),
    ]
    .into_iter()
    .map(|(name, pattern, hint, replacement)| RuleDefinition {
        name: name.to_string(),
        pattern: pattern.to_string(),
        hint: hint.to_string(),
        replacement: replacement.map(str::to_string),
    })
    .collect()
}

/// Pattern-based checker: every rule match becomes a flagged span.
pub struct RuleChecker {
    rules: Vec<CompiledRule>,
}

impl RuleChecker {
    /// Creates a checker over the built-in default rules.
    pub fn new() -> Result<Self, CheckerError> {
        Self::with_rules(default_rules())
    }

    /// Creates a checker from a YAML rules file.
    ///
    /// The file is a YAML list of `{name, pattern, hint, replacement?}`
    /// entries. An unreadable file or an invalid pattern is a configuration
    /// error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let definitions: Vec<RuleDefinition> = serde_yaml::from_str(&content)
            .map_err(|e| CheckerError::invalid_rule(path.display().to_string(), e.to_string()))?;
        debug!("Loaded {} rules from {}", definitions.len(), path.display());
        Self::with_rules(definitions)
    }

    /// Compiles the given rule definitions.
    pub fn with_rules(definitions: Vec<RuleDefinition>) -> Result<Self, CheckerError> {
        let mut rules = Vec::with_capacity(definitions.len());
        for def in definitions {
            let pattern = Regex::new(&def.pattern)
                .map_err(|e| CheckerError::invalid_rule(&def.name, e.to_string()))?;
            rules.push(CompiledRule {
                name: def.name,
                pattern,
                hint: def.hint,
                replacement: def.replacement,
            });
        }
        Ok(Self { rules })
    }
}

impl Checker for RuleChecker {
    fn name(&self) -> &str {
        "rule"
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        let mut issues = Vec::new();

        for rule in &self.rules {
            for m in rule.pattern.find_iter(text) {
                let span = Span::new(m.start(), m.end());
                let message = if rule.hint.is_empty() {
                    rule.name.clone()
                } else {
                    format!("{}: {}", rule.name, rule.hint)
                };
                let issue = match &rule.replacement {
                    Some(replacement) => {
                        RawIssue::replace(span, m.as_str(), replacement.clone())
                            .with_message(message)
                    }
                    None => RawIssue::flag(span, m.as_str(), message),
                };
                issues.push(issue);
            }
        }

        issues.sort_by_key(|i| (i.span.start, i.span.end));
        Ok(issues)
    }
}
