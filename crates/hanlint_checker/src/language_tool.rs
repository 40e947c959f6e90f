//! Checker backed by a LanguageTool-compatible HTTP server.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use hanlint_text::Span;

use crate::{CheckCache, Checker, CheckerError, RawIssue};

/// Subset of the LanguageTool `/v2/check` response we consume.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    message: String,
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

/// Proxies checking to an external LanguageTool server.
///
/// Responses are cached by unit text (network round trips dominate the run
/// time for repeated headers and boilerplate sentences).
pub struct LanguageToolChecker {
    client: reqwest::blocking::Client,
    endpoint: String,
    language: String,
    cache: Option<Arc<CheckCache>>,
}

impl LanguageToolChecker {
    /// Creates a checker against `base_url` (e.g. `http://localhost:8010`).
    pub fn new(base_url: &str) -> Result<Self, CheckerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CheckerError::unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/v2/check", base_url.trim_end_matches('/')),
            language: "ko-KR".to_string(),
            cache: None,
        })
    }

    /// Attaches a shared response cache.
    pub fn with_cache(mut self, cache: Arc<CheckCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Overrides the language code sent to the server.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn request(&self, text: &str) -> Result<CheckResponse, CheckerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .map_err(|e| CheckerError::request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CheckerError::request(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| CheckerError::malformed(e.to_string()))
    }
}

/// Converts a LanguageTool match range (UTF-16 code units) to a byte span.
///
/// Returns `None` when the range does not land on character boundaries
/// within the text.
fn utf16_range_to_span(text: &str, offset: usize, length: usize) -> Option<Span> {
    let mut units = 0usize;
    let mut start = None;
    let end_units = offset + length;

    for (byte_idx, c) in text.char_indices() {
        if units == offset {
            start = Some(byte_idx);
        }
        if units == end_units {
            return Some(Span::new(start?, byte_idx));
        }
        units += c.len_utf16();
    }

    if units == end_units {
        // Range ends exactly at the end of the text.
        let start = if units == offset { Some(text.len()) } else { start };
        return Some(Span::new(start?, text.len()));
    }

    None
}

impl Checker for LanguageToolChecker {
    fn name(&self) -> &str {
        "language-tool"
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        if let Some(cache) = &self.cache
            && let Some(cached) = cache.get(text)
        {
            return Ok(cached);
        }

        let response = self.request(text)?;
        debug!("language-tool: {} matches", response.matches.len());

        let mut issues = Vec::with_capacity(response.matches.len());
        for m in response.matches {
            let Some(span) = utf16_range_to_span(text, m.offset, m.length) else {
                return Err(CheckerError::malformed(format!(
                    "match range {}+{} outside text",
                    m.offset, m.length
                )));
            };
            let original = text[span.start..span.end].to_string();
            let suggestion = m.replacements.into_iter().next().map(|r| r.value);
            issues.push(RawIssue {
                span,
                original,
                suggestion,
                message: Some(m.message),
                confidence: None,
            });
        }

        issues.sort_by_key(|i| (i.span.start, i.span.end));

        if let Some(cache) = &self.cache {
            cache.put(text, issues.clone());
        }

        Ok(issues)
    }
}
