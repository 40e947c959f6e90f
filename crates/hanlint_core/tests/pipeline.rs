//! End-to-end pipeline tests with injected fakes.
//!
//! A fake page source and OCR engine stand in for the PDF stack, and canned
//! checkers stand in for the detectors, so every path through extraction,
//! segmentation, merging, annotation and filtering runs without external
//! tools.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hanlint_core::{
    Checker, CheckerError, ExtractionMethod, Pipeline, ProofConfig, RawIssue, RunReport, Span,
    Whitelist, WhitelistEntry,
};
use hanlint_extract::{ExtractError, OcrEngine, PageSource};

struct FakeSource {
    pages: Vec<String>,
}

impl FakeSource {
    fn new(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PageSource for FakeSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_native(&self, page: u32) -> Result<String, ExtractError> {
        self.pages
            .get(page as usize - 1)
            .cloned()
            .ok_or_else(|| ExtractError::native(page, "page out of range"))
    }

    fn render_page_image(&self, page: u32) -> Result<PathBuf, ExtractError> {
        Ok(PathBuf::from(format!("fake-page-{}.png", page)))
    }
}

struct FakeOcr {
    text: String,
}

impl OcrEngine for FakeOcr {
    fn ocr(&self, _image: &Path, _page: u32) -> Result<String, ExtractError> {
        Ok(self.text.clone())
    }
}

/// Reports one canned issue whenever the unit contains `needle`.
struct PatternChecker {
    name: &'static str,
    needle: &'static str,
    suggestion: Option<&'static str>,
}

impl Checker for PatternChecker {
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        Ok(text
            .find(self.needle)
            .map(|start| {
                let span = Span::new(start, start + self.needle.len());
                match self.suggestion {
                    Some(s) => RawIssue::replace(span, self.needle, s),
                    None => RawIssue::flag(span, self.needle, "검토 필요"),
                }
            })
            .into_iter()
            .collect())
    }
}

/// Fails on units containing `trigger`, reports nothing otherwise.
struct TripwireChecker {
    trigger: &'static str,
}

impl Checker for TripwireChecker {
    fn name(&self) -> &str {
        "tripwire"
    }

    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError> {
        if text.contains(self.trigger) {
            Err(CheckerError::request("simulated outage"))
        } else {
            Ok(vec![])
        }
    }
}

fn config() -> ProofConfig {
    let mut config = ProofConfig::new();
    config.checker_timeout_ms = 0;
    config
}

fn run_with(
    pages: &[&str],
    ocr_text: Option<&str>,
    checkers: Vec<Arc<dyn Checker>>,
    whitelist: Whitelist,
) -> RunReport {
    let pipeline = Pipeline::with_checkers(config(), checkers, whitelist).unwrap();
    let source = FakeSource::new(pages);
    let ocr = ocr_text.map(|text| FakeOcr {
        text: text.to_string(),
    });
    pipeline.run(
        &source,
        ocr.as_ref().map(|o| o as &dyn OcrEngine),
        Path::new("fake.pdf"),
    )
}

fn spelling_checker() -> Arc<dyn Checker> {
    Arc::new(PatternChecker {
        name: "spelling",
        needle: "되요",
        suggestion: Some("돼요"),
    })
}

#[test]
fn empty_native_page_falls_back_to_ocr() {
    let report = run_with(
        &[""],
        Some("스캔된 페이지에서 안 되요 오류를 찾습니다."),
        vec![spelling_checker()],
        Whitelist::empty(),
    );

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].method, ExtractionMethod::Ocr);
    assert_eq!(report.findings[0].original, "되요");
}

#[test]
fn spacing_only_finding_has_spacing_provenance() {
    let spacing: Arc<dyn Checker> = Arc::new(PatternChecker {
        name: "spacing",
        needle: "어이없는",
        suggestion: Some("어이 없는"),
    });

    let report = run_with(
        &["어이없는 실수입니다 그렇습니다."],
        None,
        vec![spelling_checker(), spacing],
        Whitelist::empty(),
    );

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].checkers, vec!["spacing"]);
}

#[test]
fn agreeing_checkers_merge_into_one_finding() {
    let a: Arc<dyn Checker> = Arc::new(PatternChecker {
        name: "spelling",
        needle: "맞춤뻡",
        suggestion: Some("맞춤법"),
    });
    let b: Arc<dyn Checker> = Arc::new(PatternChecker {
        name: "rule",
        needle: "맞춤뻡",
        suggestion: Some("맞춤법"),
    });

    let report = run_with(
        &["여기에 맞춤뻡 오류가 있습니다."],
        None,
        vec![a, b],
        Whitelist::empty(),
    );

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].checkers, vec!["spelling", "rule"]);
    assert_eq!(report.findings[0].suggestion.as_deref(), Some("맞춤법"));
}

#[test]
fn whitelisted_finding_is_suppressed() {
    let report = run_with(
        &["그렇게 하면 안 되요 정말입니다."],
        None,
        vec![spelling_checker()],
        Whitelist::from_entries(vec![WhitelistEntry::new("되요")]),
    );

    assert!(report.findings.is_empty());
    assert_eq!(report.stats.findings, 0);
}

#[test]
fn context_scoped_whitelist_only_matches_in_context() {
    let whitelist = Whitelist::from_entries(vec![WhitelistEntry::with_context("되요", "인용문")]);

    let report = run_with(
        &["이 인용문 안에서는 되요 허용됩니다.\n일반 문장에서는 되요 오류입니다."],
        None,
        vec![spelling_checker()],
        whitelist,
    );

    // Only the unit without the required context survives the filter.
    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0].unit_text.contains("일반 문장"));
}

#[test]
fn failing_checker_loses_one_unit_not_the_document() {
    let pages: Vec<String> = (0..10)
        .map(|i| {
            if i == 4 {
                "여기는 장애를 일으키는 문장입니다 되요.".to_string()
            } else {
                format!("여기는 {}번째 정상 문장입니다 되요.", i)
            }
        })
        .collect();
    let page_refs: Vec<&str> = pages.iter().map(String::as_str).collect();

    let tripwire: Arc<dyn Checker> = Arc::new(TripwireChecker { trigger: "장애" });
    let report = run_with(
        &page_refs,
        None,
        vec![spelling_checker(), tripwire],
        Whitelist::empty(),
    );

    // The spelling findings survive on all ten pages.
    assert_eq!(report.findings.len(), 10);
    // The tripwire failure shows up as a located warning.
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].source, "tripwire");
    assert_eq!(report.warnings[0].page, 5);
    assert!(report.warnings[0].unit_span.is_some());
}

#[test]
fn finding_offsets_stay_within_page_bounds() {
    let pages = [
        "첫 페이지의 되요 오류입니다. 추가 문장도 있습니다.",
        "둘째 페이지에는 오류가 없습니다.",
        "셋째 페이지에도 되요 오류가 있습니다.",
    ];

    let report = run_with(&pages, None, vec![spelling_checker()], Whitelist::empty());

    assert_eq!(report.findings.len(), 2);
    for finding in &report.findings {
        let page_text = pages[finding.page as usize - 1];
        assert!(finding.span.end <= page_text.len());
        assert_eq!(
            &page_text[finding.span.start..finding.span.end],
            finding.original
        );
        assert!(finding.unit_span.end <= page_text.len());
    }
}

#[test]
fn findings_come_out_in_document_order() {
    let pages = [
        "첫 문장에 되요 오류입니다. 둘째 문장에도 되요 오류입니다.",
        "다음 페이지에도 되요 오류입니다.",
    ];

    let report = run_with(&pages, None, vec![spelling_checker()], Whitelist::empty());

    assert_eq!(report.findings.len(), 3);
    assert_eq!(report.findings[0].page, 1);
    assert_eq!(report.findings[1].page, 1);
    assert_eq!(report.findings[2].page, 2);
    assert!(report.findings[0].span.start < report.findings[1].span.start);
}

#[test]
fn diff_is_attached_to_suggestions() {
    let report = run_with(
        &["그렇게 하면 안 되요 정말입니다."],
        None,
        vec![spelling_checker()],
        Whitelist::empty(),
    );

    assert_eq!(report.findings[0].diff.as_deref(), Some("[-되-][+돼+]요"));
}

#[test]
fn stats_summarize_the_run() {
    let pages = [
        "첫 페이지의 되요 오류입니다. 오류 없는 문장입니다.",
        "둘째 페이지에는 오류가 없습니다.",
    ];

    let report = run_with(&pages, None, vec![spelling_checker()], Whitelist::empty());

    assert_eq!(report.stats.pages, 2);
    assert_eq!(report.stats.units, 3);
    assert_eq!(report.stats.findings, 1);
    assert_eq!(report.stats.flagged_units, 1);
    assert_eq!(report.stats.by_checker["spelling"], 1);
}

#[test]
fn non_korean_pages_produce_no_findings() {
    let report = run_with(
        &["This page is entirely in English. It has two sentences."],
        None,
        vec![spelling_checker()],
        Whitelist::empty(),
    );

    assert!(report.findings.is_empty());
    assert_eq!(report.stats.units, 0);
}
