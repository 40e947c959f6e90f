//! # hanlint_core
//!
//! Core proofreading pipeline for hanlint.
//!
//! This crate provides:
//! - run configuration ([`ProofConfig`])
//! - the page segmenter (sentence units + Korean-ratio filter)
//! - the checker [`Orchestrator`] with OR-semantics span merging
//! - diff annotation and whitelist filtering
//! - the document-level [`Pipeline`] producing a [`RunReport`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use hanlint_core::{Pipeline, ProofConfig};
//! use hanlint_extract::{PdfFile, TesseractOcr};
//!
//! let pipeline = Pipeline::new(ProofConfig::new())?;
//! let source = PdfFile::open("manual.pdf", "out/render")?;
//! let report = pipeline.run(&source, Some(&TesseractOcr::new()), "manual.pdf".as_ref());
//! println!("{} findings", report.findings.len());
//! ```

mod annotate;
mod config;
mod error;
mod filter;
mod finding;
mod orchestrator;
mod pipeline;
mod segmenter;

pub use annotate::{annotate, annotate_all};
pub use config::{ProofConfig, KNOWN_CHECKERS};
pub use error::ProofError;
pub use filter::filter_whitelisted;
pub use finding::{sort_by_priority, Finding, RunReport, RunStats, RunWarning};
pub use orchestrator::Orchestrator;
pub use pipeline::{build_checkers, Pipeline};
pub use segmenter::segment;

pub use hanlint_checker::{Checker, CheckerError, RawIssue, Whitelist, WhitelistEntry};
pub use hanlint_extract::{ExtractionMethod, Page};
pub use hanlint_text::{Span, TextUnit};
