//! Heuristic Korean spacing checker.

use std::sync::LazyLock;

use regex::Regex;

use hanlint_text::Span;

use crate::{Checker, CheckerError, RawIssue};

/// Attached sequences that the 표준어 spacing rules write with a space.
///
/// Each entry is (attached form, spaced form). Matching is plain substring:
/// these sequences are miswritten in (nearly) every prose context.
const SPACING_PAIRS: &[(&str, &str)] = &[
    ("것같", "것 같"),
    ("수있", "수 있"),
    ("수없", "수 없"),
    ("할수", "할 수"),
    ("될수", "될 수"),
    ("줄알", "줄 알"),
    ("지얼마", "지 얼마"),
];

/// Digit run directly followed by Hangul: `3개월`, `10페이지`.
static DIGIT_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[가-힣]").expect("digit-unit pattern is valid"));

/// Flags missing spaces around bound nouns, auxiliaries and units.
///
/// Produces replacement issues for attached sequences and zero-width
/// insertion issues between a number and its unit.
#[derive(Debug, Default)]
pub struct SpacingChecker;

impl SpacingChecker {
    /// Creates a checker over the built-in spacing patterns.
    pub fn new() -> Self {
        Self
    }
}

impl Checker for SpacingChecker {
    fn name(&self) -> &str {
        "spacing"
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        let mut issues = Vec::new();

        for &(attached, spaced) in SPACING_PAIRS {
            for (start, matched) in text.match_indices(attached) {
                issues.push(
                    RawIssue::replace(Span::new(start, start + matched.len()), matched, spaced)
                        .with_message("띄어쓰기 확인"),
                );
            }
        }

        for m in DIGIT_UNIT.find_iter(text) {
            // Insertion point sits between the last digit and the unit.
            let unit_start = m.as_str()
                .rfind(|c: char| c.is_ascii_digit())
                .map(|i| m.start() + i + 1)
                .unwrap_or(m.start());
            issues.push(
                RawIssue::insert(unit_start, " ").with_message("숫자와 단위 사이 띄어쓰기"),
            );
        }

        issues.sort_by_key(|i| (i.span.start, i.span.end));
        Ok(issues)
    }
}
