//! Whitelist-based false-positive suppression.

use tracing::debug;

use hanlint_checker::Whitelist;

use crate::Finding;

/// Drops findings whose original text matches a whitelist entry.
///
/// An entry with a context applies only when the finding's containing unit
/// text contains that context. Survivor order is preserved and the filter is
/// idempotent.
pub fn filter_whitelisted(findings: Vec<Finding>, whitelist: &Whitelist) -> Vec<Finding> {
    if whitelist.is_empty() {
        return findings;
    }

    let before = findings.len();
    let surviving: Vec<Finding> = findings
        .into_iter()
        .filter(|finding| !whitelist.matches(&finding.original, &finding.unit_text))
        .collect();

    if surviving.len() < before {
        debug!("Whitelist suppressed {} finding(s)", before - surviving.len());
    }
    surviving
}

#[cfg(test)]
mod tests {
    use hanlint_checker::WhitelistEntry;
    use hanlint_extract::ExtractionMethod;
    use hanlint_text::Span;
    use pretty_assertions::assert_eq;

    use super::*;

    fn finding(original: &str, unit_text: &str) -> Finding {
        Finding {
            page: 1,
            span: Span::new(0, original.len()),
            original: original.to_string(),
            suggestion: None,
            checkers: vec!["spelling".into()],
            message: None,
            unit_text: unit_text.to_string(),
            unit_span: Span::new(0, unit_text.len()),
            method: ExtractionMethod::Native,
            diff: None,
        }
    }

    #[test]
    fn test_exact_match_suppressed() {
        let whitelist = Whitelist::from_entries(vec![WhitelistEntry::new("되요")]);
        let surviving = filter_whitelisted(
            vec![finding("되요", "되요가 들어간 문장"), finding("금새", "금새 지나갔다")],
            &whitelist,
        );
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].original, "금새");
    }

    #[test]
    fn test_context_scoped_entry() {
        let whitelist =
            Whitelist::from_entries(vec![WhitelistEntry::with_context("되요", "인용문")]);

        // Same original text; only the unit containing the context matches.
        let surviving = filter_whitelisted(
            vec![
                finding("되요", "이 인용문 속의 되요"),
                finding("되요", "일반 본문 속의 되요"),
            ],
            &whitelist,
        );
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].unit_text, "일반 본문 속의 되요");
    }

    #[test]
    fn test_idempotent() {
        let whitelist = Whitelist::from_entries(vec![WhitelistEntry::new("되요")]);
        let input = vec![finding("되요", "되요 문장"), finding("금새", "금새 문장")];

        let once = filter_whitelisted(input, &whitelist);
        let twice = filter_whitelisted(once.clone(), &whitelist);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_whitelist_passes_everything() {
        let surviving = filter_whitelisted(vec![finding("되요", "되요 문장")], &Whitelist::empty());
        assert_eq!(surviving.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let whitelist = Whitelist::from_entries(vec![WhitelistEntry::new("삭제")]);
        let surviving = filter_whitelisted(
            vec![
                finding("첫째", "첫째 문장"),
                finding("삭제", "삭제 문장"),
                finding("둘째", "둘째 문장"),
            ],
            &whitelist,
        );
        assert_eq!(surviving.len(), 2);
        assert_eq!(surviving[0].original, "첫째");
        assert_eq!(surviving[1].original, "둘째");
    }
}
