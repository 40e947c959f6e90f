//! Page text → checkable sentence units.

use tracing::trace;

use hanlint_extract::Page;
use hanlint_text::{korean_ratio, SentenceSplitter, TextUnit};

use crate::ProofConfig;

/// Splits a page into sentence units and drops the ones not worth checking.
///
/// A unit survives when its Korean ratio is at or above the configured
/// threshold (inclusive boundary) and it is at least `min_unit_chars` long.
/// Everything else is page furniture, tables, or OCR noise. Document order
/// is preserved; later stages rely on offset monotonicity.
pub fn segment(page: &Page, config: &ProofConfig) -> Vec<TextUnit> {
    SentenceSplitter::split(&page.text)
        .into_iter()
        .filter_map(|sentence| {
            if sentence.text.chars().count() < config.min_unit_chars {
                return None;
            }
            let ratio = korean_ratio(&sentence.text);
            if ratio < config.korean_ratio {
                trace!(
                    "Page {}: dropping unit with Korean ratio {:.2}",
                    page.number, ratio
                );
                return None;
            }
            Some(TextUnit::new(page.number, sentence.span, sentence.text, ratio))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use hanlint_extract::ExtractionMethod;
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(text: &str) -> Page {
        Page {
            number: 1,
            text: text.to_string(),
            method: ExtractionMethod::Native,
            quality: 1.0,
        }
    }

    fn config() -> ProofConfig {
        ProofConfig::new()
    }

    #[test]
    fn test_korean_sentences_survive() {
        let units = segment(&page("이 문장은 검사 대상입니다. 이것도 검사 대상입니다."), &config());
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].page, 1);
        assert!(units[0].korean_ratio > 0.5);
    }

    #[test]
    fn test_offsets_index_page_text() {
        let text = "첫 번째 문장입니다. 두 번째 문장입니다.";
        let units = segment(&page(text), &config());
        for unit in &units {
            assert_eq!(&text[unit.span.start..unit.span.end], unit.text);
        }
    }

    #[test]
    fn test_non_korean_dropped() {
        let units = segment(&page("This is an English sentence only."), &config());
        assert!(units.is_empty());
    }

    #[test]
    fn test_short_units_dropped() {
        // Long enough ratio, but under min_unit_chars.
        let units = segment(&page("네 맞습니다."), &config());
        assert!(units.is_empty());
    }

    #[test]
    fn test_ratio_boundary_is_inclusive() {
        let mut cfg = config();
        // "한글ab한글ab한글" has ratio 6/10 = 0.6.
        let text = "한글ab한글ab한글";
        cfg.korean_ratio = 0.6;
        cfg.min_unit_chars = 5;
        assert_eq!(segment(&page(text), &cfg).len(), 1);

        // Just below the unit's ratio passes too; just above drops it.
        cfg.korean_ratio = 0.601;
        assert!(segment(&page(text), &cfg).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let units = segment(
            &page("첫 번째 검사 문장입니다. 두 번째 검사 문장입니다. 세 번째 검사 문장입니다."),
            &config(),
        );
        assert_eq!(units.len(), 3);
        assert!(units[0].span.start < units[1].span.start);
        assert!(units[1].span.start < units[2].span.start);
    }

    #[test]
    fn test_empty_page() {
        assert!(segment(&page(""), &config()).is_empty());
    }
}
