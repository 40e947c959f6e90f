//! Character-level diff rendering for suggested corrections.
//!
//! Produces the bracketed display form reviewers see in reports:
//! deleted runs as `[-…-]`, inserted runs as `[+…+]`, unchanged text as-is.

use unicode_segmentation::UnicodeSegmentation;

/// Renders a grapheme-level diff between `original` and `corrected`.
///
/// Returns an empty string when there is nothing to show (identical texts or
/// an empty correction). The output is a pure function of its inputs:
/// identical pairs always yield byte-identical diffs.
pub fn render_diff(original: &str, corrected: &str) -> String {
    if corrected.is_empty() || original == corrected {
        return String::new();
    }

    let a: Vec<&str> = original.graphemes(true).collect();
    let b: Vec<&str> = corrected.graphemes(true).collect();
    let ops = lcs_ops(&a, &b);

    let mut out = String::with_capacity(original.len() + corrected.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    let flush = |out: &mut String, deleted: &mut String, inserted: &mut String| {
        if !deleted.is_empty() {
            out.push_str("[-");
            out.push_str(deleted);
            out.push_str("-]");
            deleted.clear();
        }
        if !inserted.is_empty() {
            out.push_str("[+");
            out.push_str(inserted);
            out.push_str("+]");
            inserted.clear();
        }
    };

    for op in ops {
        match op {
            Op::Equal(g) => {
                flush(&mut out, &mut deleted, &mut inserted);
                out.push_str(g);
            }
            Op::Delete(g) => deleted.push_str(g),
            Op::Insert(g) => inserted.push_str(g),
        }
    }
    flush(&mut out, &mut deleted, &mut inserted);

    out
}

enum Op<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

/// Standard LCS dynamic program with a deterministic backtrack: diagonal
/// moves are preferred, then deletion, then insertion.
fn lcs_ops<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<Op<'a>> {
    let n = a.len();
    let m = b.len();
    let mut table = vec![0u32; (n + 1) * (m + 1)];
    let idx = |i: usize, j: usize| i * (m + 1) + j;

    for i in 1..=n {
        for j in 1..=m {
            table[idx(i, j)] = if a[i - 1] == b[j - 1] {
                table[idx(i - 1, j - 1)] + 1
            } else {
                table[idx(i - 1, j)].max(table[idx(i, j - 1)])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push(Op::Equal(a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j == 0 || (i > 0 && table[idx(i - 1, j)] >= table[idx(i, j - 1)]) {
            ops.push(Op::Delete(a[i - 1]));
            i -= 1;
        } else {
            ops.push(Op::Insert(b[j - 1]));
            j -= 1;
        }
    }
    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identical_is_empty() {
        assert_eq!(render_diff("같은 문장", "같은 문장"), "");
    }

    #[test]
    fn test_empty_correction_is_empty() {
        assert_eq!(render_diff("원본", ""), "");
    }

    #[test]
    fn test_replacement() {
        assert_eq!(render_diff("되요", "돼요"), "[-되-][+돼+]요");
    }

    #[test]
    fn test_insertion_only() {
        assert_eq!(render_diff("것같다", "것 같다"), "것[+ +]같다");
    }

    #[test]
    fn test_deletion_only() {
        assert_eq!(render_diff("한 글", "한글"), "한[- -]글");
    }

    #[test]
    fn test_deterministic() {
        let first = render_diff("맞춤법 검샤", "맞춤법 검사");
        for _ in 0..5 {
            assert_eq!(render_diff("맞춤법 검샤", "맞춤법 검사"), first);
        }
    }

    #[test]
    fn test_mixed_edit() {
        let diff = render_diff("어이 없는 실수", "어이없는 실수");
        assert_eq!(diff, "어이[- -]없는 실수");
    }

    #[test]
    fn test_composed_grapheme_replacement() {
        // Whole syllables are diffed, not jamo fragments.
        let diff = render_diff("금새 떠났다", "금세 떠났다");
        assert_eq!(diff, "금[-새-][+세+] 떠났다");
    }
}
