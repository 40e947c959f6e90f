//! Dictionary-based spelling checker for common Korean misspellings.

use hanlint_text::Span;

use crate::{Checker, CheckerError, RawIssue};

/// Frequent misspelling → correction pairs.
///
/// Kept to confusions that are wrong in (nearly) every context; ambiguous
/// words like 바램/바람 are left to the rule checker's hints instead.
const CONFUSION_PAIRS: &[(&str, &str)] = &[
    ("되요", "돼요"),
    ("됬", "됐"),
    ("뵈요", "봬요"),
    ("않되", "안 되"),
    ("않돼", "안 돼"),
    ("웬지", "왠지"),
    ("왠만", "웬만"),
    ("금새", "금세"),
    ("몇일", "며칠"),
    ("오랫만", "오랜만"),
    ("설겆이", "설거지"),
    ("희안", "희한"),
    ("어의없", "어이없"),
    ("역활", "역할"),
    ("할께", "할게"),
    ("할껄", "할걸"),
];

/// Looks up known misspellings by substring scan.
#[derive(Debug, Default)]
pub struct SpellingChecker;

impl SpellingChecker {
    /// Creates a checker over the built-in confusion table.
    pub fn new() -> Self {
        Self
    }
}

impl Checker for SpellingChecker {
    fn name(&self) -> &str {
        "spelling"
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        let mut issues = Vec::new();

        for &(wrong, right) in CONFUSION_PAIRS {
            for (start, matched) in text.match_indices(wrong) {
                issues.push(
                    RawIssue::replace(Span::new(start, start + matched.len()), matched, right)
                        .with_confidence(0.9),
                );
            }
        }

        // One issue per position: keep the earliest, longest match when
        // table entries happen to overlap in the text.
        issues.sort_by_key(|i| (i.span.start, std::cmp::Reverse(i.span.end)));
        let mut last_end = 0usize;
        issues.retain(|issue| {
            if issue.span.start < last_end {
                return false;
            }
            last_end = issue.span.end;
            true
        });

        Ok(issues)
    }
}
