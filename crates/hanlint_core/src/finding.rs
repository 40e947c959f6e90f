//! User-facing findings, warnings, and run reports.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use hanlint_extract::ExtractionMethod;
use hanlint_text::Span;

/// A merged, page-anchored problem report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based page number.
    pub page: u32,
    /// Byte span within the page text.
    pub span: Span,
    /// The flagged text (empty for insertion points).
    pub original: String,
    /// Representative suggestion, when any contributing checker had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Contributing checker names, in registration order, deduplicated.
    pub checkers: Vec<String>,
    /// Representative hint/message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The sentence unit containing the finding.
    pub unit_text: String,
    /// Span of the unit within the page text.
    pub unit_span: Span,
    /// How the page text was extracted.
    pub method: ExtractionMethod,
    /// Bracketed diff of original vs. suggestion; filled by the annotator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl Finding {
    /// A truncated unit snippet for compact report columns.
    pub fn snippet(&self, max_chars: usize) -> String {
        let mut out: String = self.unit_text.chars().take(max_chars).collect();
        if self.unit_text.chars().count() > max_chars {
            out.push('…');
        }
        out
    }
}

/// A recovered partial failure, reported alongside the findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunWarning {
    /// 1-based page number the failure belongs to.
    pub page: u32,
    /// Failing component: `extraction` or a checker name.
    pub source: String,
    /// Span of the affected unit, when the failure was unit-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_span: Option<Span>,
    /// Human-readable description.
    pub message: String,
}

impl RunWarning {
    /// Creates an extraction warning for a page.
    pub fn extraction(page: u32, message: impl Into<String>) -> Self {
        Self {
            page,
            source: "extraction".to_string(),
            unit_span: None,
            message: message.into(),
        }
    }

    /// Creates a checker warning for a unit.
    pub fn checker(
        page: u32,
        checker: impl Into<String>,
        unit_span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            page,
            source: checker.into(),
            unit_span: Some(unit_span),
            message: message.into(),
        }
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Pages in the document.
    pub pages: usize,
    /// Units that passed the Korean-ratio and length filters.
    pub units: usize,
    /// Units with at least one surviving finding.
    pub flagged_units: usize,
    /// Surviving findings.
    pub findings: usize,
    /// Findings per contributing checker.
    pub by_checker: BTreeMap<String, usize>,
}

/// The complete result of proofreading one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Source document path.
    pub source: PathBuf,
    /// Ordered findings (unit order, then span order).
    pub findings: Vec<Finding>,
    /// Recovered partial failures.
    pub warnings: Vec<RunWarning>,
    /// Aggregate counters.
    pub stats: RunStats,
}

/// Sorts findings for review priority: rule hits first, then findings
/// several checkers agree on, then document order.
pub fn sort_by_priority(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        let score = |f: &Finding| {
            let mut s = 0i32;
            if f.checkers.iter().any(|c| c == "rule") {
                s += 100;
            }
            if f.checkers.len() > 1 {
                s += 10;
            }
            s
        };
        score(b)
            .cmp(&score(a))
            .then(a.page.cmp(&b.page))
            .then(a.span.cmp(&b.span))
    });
}
