//! Attaches display diffs to findings.

use hanlint_text::render_diff;

use crate::Finding;

/// Fills the `diff` field of a finding that carries a suggestion.
///
/// Pure: identical (original, suggestion) pairs always produce identical
/// diff strings. Findings without a suggestion pass through unchanged.
pub fn annotate(mut finding: Finding) -> Finding {
    finding.diff = finding
        .suggestion
        .as_deref()
        .map(|suggestion| render_diff(&finding.original, suggestion))
        .filter(|diff| !diff.is_empty());
    finding
}

/// Annotates a whole finding list, preserving order.
pub fn annotate_all(findings: Vec<Finding>) -> Vec<Finding> {
    findings.into_iter().map(annotate).collect()
}

#[cfg(test)]
mod tests {
    use hanlint_extract::ExtractionMethod;
    use hanlint_text::Span;
    use pretty_assertions::assert_eq;

    use super::*;

    fn finding(original: &str, suggestion: Option<&str>) -> Finding {
        Finding {
            page: 1,
            span: Span::new(0, original.len()),
            original: original.to_string(),
            suggestion: suggestion.map(str::to_string),
            checkers: vec!["spelling".into()],
            message: None,
            unit_text: original.to_string(),
            unit_span: Span::new(0, original.len()),
            method: ExtractionMethod::Native,
            diff: None,
        }
    }

    #[test]
    fn test_annotate_replacement() {
        let annotated = annotate(finding("되요", Some("돼요")));
        assert_eq!(annotated.diff.as_deref(), Some("[-되-][+돼+]요"));
    }

    #[test]
    fn test_annotate_without_suggestion() {
        let annotated = annotate(finding("것같", None));
        assert!(annotated.diff.is_none());
    }

    #[test]
    fn test_annotate_identical_pair_yields_no_diff() {
        let annotated = annotate(finding("같음", Some("같음")));
        assert!(annotated.diff.is_none());
    }

    #[test]
    fn test_annotate_deterministic() {
        let a = annotate(finding("금새 갔다", Some("금세 갔다")));
        let b = annotate(finding("금새 갔다", Some("금세 갔다")));
        assert_eq!(a.diff, b.diff);
    }

    #[test]
    fn test_annotate_all_preserves_order() {
        let annotated = annotate_all(vec![finding("되요", Some("돼요")), finding("것같", None)]);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].original, "되요");
        assert_eq!(annotated[1].original, "것같");
    }
}
