//! Sentence-level text unit passed to checkers.

use serde::{Deserialize, Serialize};

use crate::Span;

/// A sentence-like segment of a page, the unit of checking.
///
/// `span` is the byte range of `text` within the owning page's canonical
/// text; `korean_ratio` is always within [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    /// 1-based page number of the owning page.
    pub page: u32,
    /// Byte range within the page text.
    pub span: Span,
    /// The unit text, identical to the page text slice at `span`.
    pub text: String,
    /// Hangul share of the unit's visible characters.
    pub korean_ratio: f64,
}

impl TextUnit {
    /// Creates a new unit.
    pub fn new(page: u32, span: Span, text: impl Into<String>, korean_ratio: f64) -> Self {
        Self {
            page,
            span,
            text: text.into(),
            korean_ratio,
        }
    }
}
