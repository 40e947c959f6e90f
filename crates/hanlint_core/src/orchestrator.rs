//! Checker fan-out and OR-semantics merge.
//!
//! Every enabled checker runs over every unit; a problem flagged by any one
//! of them is a candidate finding (union, not intersection: recall over
//! precision, since a human reviews the report). The interesting part is
//! folding the heterogeneous per-checker issues into one deduplicated,
//! deterministically ordered finding list.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use tracing::{debug, warn};

use hanlint_checker::{Checker, CheckerError, RawIssue};
use hanlint_extract::ExtractionMethod;
use hanlint_text::TextUnit;

use crate::{Finding, ProofConfig, RunWarning};

/// Runs checkers over units and merges their raw issues into findings.
pub struct Orchestrator {
    checkers: Vec<Arc<dyn Checker>>,
    /// Precedence rank per checker, parallel to `checkers`.
    ranks: Vec<usize>,
    timeout: Duration,
}

/// An issue tagged with the registration index of its checker.
struct Contribution {
    checker_idx: usize,
    issue: RawIssue,
}

/// A cluster of overlapping, suggestion-compatible contributions.
struct Cluster {
    contributions: Vec<Contribution>,
}

impl Orchestrator {
    /// Creates an orchestrator for the given checkers.
    ///
    /// Checker precedence comes from the config's `checkers` list;
    /// registration order breaks ties.
    pub fn new(checkers: Vec<Arc<dyn Checker>>, config: &ProofConfig) -> Self {
        let ranks = checkers
            .iter()
            .map(|c| config.precedence(c.name()))
            .collect();
        Self {
            checkers,
            ranks,
            timeout: Duration::from_millis(config.checker_timeout_ms),
        }
    }

    /// Checks all units in order, merging per unit.
    pub fn run(
        &self,
        units: &[TextUnit],
        method: ExtractionMethod,
    ) -> (Vec<Finding>, Vec<RunWarning>) {
        let mut findings = Vec::new();
        let mut warnings = Vec::new();

        for unit in units {
            let (unit_findings, unit_warnings) = self.check_unit(unit, method);
            findings.extend(unit_findings);
            warnings.extend(unit_warnings);
        }

        (findings, warnings)
    }

    /// Runs every checker over one unit and merges the results.
    ///
    /// The merge is a join point: it starts only after all checkers for the
    /// unit have returned (or failed, or timed out).
    fn check_unit(
        &self,
        unit: &TextUnit,
        method: ExtractionMethod,
    ) -> (Vec<Finding>, Vec<RunWarning>) {
        let mut contributions = Vec::new();
        let mut warnings = Vec::new();

        for (checker_idx, checker) in self.checkers.iter().enumerate() {
            match self.invoke(checker, &unit.text) {
                Ok(issues) => {
                    contributions.extend(issues.into_iter().map(|issue| Contribution {
                        checker_idx,
                        issue,
                    }));
                }
                Err(e) => {
                    warn!(
                        "Checker '{}' failed on page {} unit at {}: {}",
                        checker.name(),
                        unit.page,
                        unit.span.start,
                        e
                    );
                    warnings.push(RunWarning::checker(
                        unit.page,
                        checker.name(),
                        unit.span,
                        e.to_string(),
                    ));
                }
            }
        }

        (self.merge(unit, method, contributions), warnings)
    }

    /// Invokes one checker, bounded by the configured timeout.
    ///
    /// The checker runs on a worker thread; on timeout the thread is
    /// detached (its late result is discarded) and the unit is treated as
    /// unchecked by this checker.
    fn invoke(
        &self,
        checker: &Arc<dyn Checker>,
        text: &str,
    ) -> Result<Vec<RawIssue>, CheckerError> {
        if self.timeout.is_zero() {
            return checker.check(text);
        }

        let (tx, rx) = bounded(1);
        let worker = Arc::clone(checker);
        let owned = text.to_string();
        std::thread::spawn(move || {
            let _ = tx.send(worker.check(&owned));
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(CheckerError::unavailable(format!(
                "timed out after {:?}",
                self.timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => {
                Err(CheckerError::unavailable("checker worker panicked"))
            }
        }
    }

    /// Merge policy (per unit):
    /// 1. sort contributions by (start, end), registration order as tie-break;
    /// 2. cluster an issue into an existing group when their spans overlap
    ///    and their suggestions are compatible; otherwise it opens its own
    ///    group anchored at its own span;
    /// 3. each group yields one finding carrying the union of contributing
    ///    checker names and the (original, suggestion) of its
    ///    highest-precedence contributor;
    /// 4. offsets are translated to page-relative before returning.
    fn merge(
        &self,
        unit: &TextUnit,
        method: ExtractionMethod,
        mut contributions: Vec<Contribution>,
    ) -> Vec<Finding> {
        contributions.sort_by_key(|c| (c.issue.span.start, c.issue.span.end, c.checker_idx));

        let mut clusters: Vec<Cluster> = Vec::new();
        for contribution in contributions {
            let target = clusters.iter_mut().find(|cluster| {
                cluster.contributions.iter().any(|existing| {
                    existing.issue.span.overlaps(&contribution.issue.span)
                        && compatible(&existing.issue, &contribution.issue)
                })
            });

            match target {
                Some(cluster) => cluster.contributions.push(contribution),
                None => clusters.push(Cluster {
                    contributions: vec![contribution],
                }),
            }
        }

        debug!(
            "Page {} unit at {}: {} cluster(s)",
            unit.page,
            unit.span.start,
            clusters.len()
        );

        let mut findings: Vec<Finding> = clusters
            .into_iter()
            .map(|cluster| self.finding_from(unit, method, cluster))
            .collect();
        findings.sort_by_key(|f| (f.span.start, f.span.end));
        findings
    }

    /// Builds one finding from a cluster of agreeing contributions.
    fn finding_from(&self, unit: &TextUnit, method: ExtractionMethod, cluster: Cluster) -> Finding {
        // Representative: best precedence rank, ties broken by registration
        // index so duplicate registration stays deterministic.
        let representative = cluster
            .contributions
            .iter()
            .min_by_key(|c| (self.ranks[c.checker_idx], c.checker_idx))
            .expect("clusters are never empty");

        let mut checkers: Vec<String> = Vec::new();
        for contribution in &cluster.contributions {
            let name = self.checkers[contribution.checker_idx].name();
            if !checkers.iter().any(|n| n == name) {
                checkers.push(name.to_string());
            }
        }

        // The representative may carry no suggestion/message even when a
        // lower-precedence contributor does; fall back along precedence.
        let mut by_rank: Vec<&Contribution> = cluster.contributions.iter().collect();
        by_rank.sort_by_key(|c| (self.ranks[c.checker_idx], c.checker_idx));
        let suggestion = by_rank.iter().find_map(|c| c.issue.suggestion.clone());
        let message = by_rank.iter().find_map(|c| c.issue.message.clone());

        Finding {
            page: unit.page,
            span: representative.issue.span.offset(unit.span.start),
            original: representative.issue.original.clone(),
            suggestion,
            checkers,
            message,
            unit_text: unit.text.clone(),
            unit_span: unit.span,
            method,
            diff: None,
        }
    }
}

/// Two issues describe the same finding when their replacements agree:
/// identical, one a substring superset of the other, or at most one of them
/// present at all.
fn compatible(a: &RawIssue, b: &RawIssue) -> bool {
    match (a.suggestion.as_deref(), b.suggestion.as_deref()) {
        (Some(x), Some(y)) => x == y || x.contains(y) || y.contains(x),
        _ => true,
    }
}
