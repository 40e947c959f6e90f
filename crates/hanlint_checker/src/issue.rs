//! Raw issues produced by individual checkers.

use serde::{Deserialize, Serialize};

use hanlint_text::Span;

/// A candidate problem reported by one checker for one text unit.
///
/// Offsets are unit-relative; the orchestrator translates them to
/// page-relative offsets when issues become findings. Issues live only
/// within one orchestration pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Byte span within the unit text. `start == end` marks an insertion
    /// point (e.g. a missing space).
    pub span: Span,

    /// The flagged substring, empty for insertion points.
    pub original: String,

    /// Replacement text, when the checker has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Human-readable hint (rule name, explanation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Checker-specific confidence, in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl RawIssue {
    /// Creates a replacement issue.
    pub fn replace(span: Span, original: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            span,
            original: original.into(),
            suggestion: Some(suggestion.into()),
            message: None,
            confidence: None,
        }
    }

    /// Creates an insertion-point issue at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            span: Span::new(offset, offset),
            original: String::new(),
            suggestion: Some(text.into()),
            message: None,
            confidence: None,
        }
    }

    /// Creates a flag-only issue without a concrete replacement.
    pub fn flag(span: Span, original: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            span,
            original: original.into(),
            suggestion: None,
            message: Some(message.into()),
            confidence: None,
        }
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
