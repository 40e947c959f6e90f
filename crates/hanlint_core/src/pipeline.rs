//! The whole-document proofreading pipeline.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use hanlint_checker::{
    CheckCache, Checker, LanguageToolChecker, RuleChecker, SpacingChecker, SpellingChecker,
    Whitelist,
};
use hanlint_extract::{extract_page, OcrEngine, PageSource};

use crate::annotate::annotate_all;
use crate::filter::filter_whitelisted;
use crate::orchestrator::Orchestrator;
use crate::segmenter::segment;
use crate::{Finding, ProofConfig, ProofError, RunReport, RunStats, RunWarning};

/// Instantiates the checkers named in the configuration, in order.
///
/// Also returns the LanguageTool response cache when one is configured, so
/// the caller can flush it after the run.
pub fn build_checkers(
    config: &ProofConfig,
) -> Result<(Vec<Arc<dyn Checker>>, Option<Arc<CheckCache>>), ProofError> {
    let mut checkers: Vec<Arc<dyn Checker>> = Vec::with_capacity(config.checkers.len());
    let mut lt_cache = None;

    for name in &config.checkers {
        let checker: Arc<dyn Checker> = match name.as_str() {
            "spelling" => Arc::new(SpellingChecker::new()),
            "spacing" => Arc::new(SpacingChecker::new()),
            "rule" => match &config.rules_path {
                Some(path) => Arc::new(RuleChecker::from_file(path)?),
                None => Arc::new(RuleChecker::new()?),
            },
            "language-tool" => {
                let url = config.language_tool_url.as_deref().ok_or_else(|| {
                    ProofError::config("language-tool checker requires language_tool_url")
                })?;
                let mut checker = LanguageToolChecker::new(url)?;
                if let Some(cache_path) = &config.cache_path {
                    let cache = Arc::new(CheckCache::open(cache_path));
                    checker = checker.with_cache(Arc::clone(&cache));
                    lt_cache = Some(cache);
                }
                Arc::new(checker)
            }
            other => {
                return Err(ProofError::config(format!("unknown checker '{}'", other)));
            }
        };
        info!("Checker enabled: {}", checker.name());
        checkers.push(checker);
    }

    Ok((checkers, lt_cache))
}

/// Per-page processing outcome, collected before assembling the report.
struct PageOutcome {
    page: u32,
    findings: Vec<Finding>,
    warnings: Vec<RunWarning>,
    units: usize,
}

/// Proofreads whole documents.
///
/// Holds the run configuration, the instantiated checkers and the whitelist;
/// no state survives between documents.
pub struct Pipeline {
    config: ProofConfig,
    checkers: Vec<Arc<dyn Checker>>,
    whitelist: Whitelist,
    lt_cache: Option<Arc<CheckCache>>,
}

impl Pipeline {
    /// Builds a pipeline from configuration, loading rules and whitelist.
    pub fn new(config: ProofConfig) -> Result<Self, ProofError> {
        config.validate()?;
        let (checkers, lt_cache) = build_checkers(&config)?;
        let whitelist = match &config.whitelist_path {
            Some(path) => Whitelist::load(path)?,
            None => Whitelist::empty(),
        };
        let mut pipeline = Self::with_checkers(config, checkers, whitelist)?;
        pipeline.lt_cache = lt_cache;
        Ok(pipeline)
    }

    /// Builds a pipeline with explicit checkers and whitelist.
    ///
    /// The entry point for tests and embedders registering their own
    /// checker implementations.
    pub fn with_checkers(
        config: ProofConfig,
        checkers: Vec<Arc<dyn Checker>>,
        whitelist: Whitelist,
    ) -> Result<Self, ProofError> {
        if checkers.is_empty() {
            return Err(ProofError::config(
                "no checkers enabled; the report would be empty",
            ));
        }
        Ok(Self {
            config,
            checkers,
            whitelist,
            lt_cache: None,
        })
    }

    /// The effective configuration.
    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    /// Proofreads one document.
    ///
    /// Pages are processed in parallel; extraction and checker failures
    /// degrade to warnings, so this never fails once the pipeline exists.
    pub fn run(
        &self,
        source: &dyn PageSource,
        ocr: Option<&dyn OcrEngine>,
        source_path: &Path,
    ) -> RunReport {
        let orchestrator = Orchestrator::new(self.checkers.clone(), &self.config);
        let ocr = if self.config.ocr { ocr } else { None };
        let page_count = source.page_count();

        info!("Processing {} ({} pages)", source_path.display(), page_count);

        let mut outcomes: Vec<PageOutcome> = (1..=page_count as u32)
            .into_par_iter()
            .map(|page_no| self.process_page(source, ocr, &orchestrator, page_no))
            .collect();
        outcomes.sort_by_key(|o| o.page);

        let mut findings = Vec::new();
        let mut warnings = Vec::new();
        let mut total_units = 0usize;
        for outcome in outcomes {
            findings.extend(outcome.findings);
            warnings.extend(outcome.warnings);
            total_units += outcome.units;
        }

        let findings = filter_whitelisted(findings, &self.whitelist);
        let stats = compute_stats(page_count, total_units, &findings);

        if let Some(cache) = &self.lt_cache
            && let Err(e) = cache.flush()
        {
            warn!("Failed to save checker cache: {}", e);
        }

        info!(
            "Checked {} units on {} pages, {} finding(s), {} warning(s)",
            stats.units,
            stats.pages,
            stats.findings,
            warnings.len()
        );

        RunReport {
            source: source_path.to_path_buf(),
            findings,
            warnings,
            stats,
        }
    }

    fn process_page(
        &self,
        source: &dyn PageSource,
        ocr: Option<&dyn OcrEngine>,
        orchestrator: &Orchestrator,
        page_no: u32,
    ) -> PageOutcome {
        let page = match extract_page(source, ocr, page_no, &self.config.selector) {
            Ok(page) => page,
            Err(e) => {
                warn!("Page {}: extraction failed: {}", page_no, e);
                return PageOutcome {
                    page: page_no,
                    findings: Vec::new(),
                    warnings: vec![RunWarning::extraction(page_no, e.to_string())],
                    units: 0,
                };
            }
        };

        let units = segment(&page, &self.config);
        let unit_count = units.len();
        let (findings, warnings) = orchestrator.run(&units, page.method);

        PageOutcome {
            page: page_no,
            findings: annotate_all(findings),
            warnings,
            units: unit_count,
        }
    }
}

fn compute_stats(pages: usize, units: usize, findings: &[Finding]) -> RunStats {
    let flagged_units: HashSet<(u32, usize)> = findings
        .iter()
        .map(|f| (f.page, f.unit_span.start))
        .collect();

    let mut stats = RunStats {
        pages,
        units,
        flagged_units: flagged_units.len(),
        findings: findings.len(),
        ..RunStats::default()
    };
    for finding in findings {
        for checker in &finding.checkers {
            *stats.by_checker.entry(checker.clone()).or_insert(0) += 1;
        }
    }
    stats
}
