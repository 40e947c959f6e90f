//! `hanlint check` - proofread one PDF document.

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use hanlint_core::{sort_by_priority, Pipeline, ProofConfig, RunReport};
use hanlint_extract::{OcrEngine, PdfFile, TesseractOcr};

use crate::cli::{Cli, Commands, Format, SortOrder};
use crate::output;

pub fn run(cli: &Cli) -> Result<bool> {
    let Commands::Check {
        pdf,
        out_dir,
        format,
        sort,
        checkers,
        korean_ratio,
        min_length,
        no_ocr,
        ocr_threshold,
        rules_path,
        whitelist_path,
        timeout_ms,
    } = &cli.command
    else {
        unreachable!("dispatched from main");
    };

    let mut config = load_config(cli.config.as_deref())?;

    // CLI flags override file values.
    if let Some(list) = checkers {
        config.checkers = list.clone();
    }
    if let Some(ratio) = korean_ratio {
        config.korean_ratio = *ratio;
    }
    if let Some(min) = min_length {
        config.min_unit_chars = *min;
    }
    if *no_ocr {
        config.ocr = false;
    }
    if let Some(threshold) = ocr_threshold {
        config.selector.min_chars = *threshold;
    }
    if let Some(path) = rules_path {
        config.rules_path = Some(path.clone());
    }
    if let Some(path) = whitelist_path {
        config.whitelist_path = Some(path.clone());
    }
    if let Some(ms) = timeout_ms {
        config.checker_timeout_ms = *ms;
    }
    config.validate().into_diagnostic()?;

    std::fs::create_dir_all(out_dir).into_diagnostic()?;

    let pipeline = Pipeline::new(config).into_diagnostic()?;
    let source = PdfFile::open(pdf, out_dir.join("render")).into_diagnostic()?;

    let ocr_engine = TesseractOcr::new();
    let ocr: Option<&dyn OcrEngine> = if pipeline.config().ocr {
        Some(&ocr_engine)
    } else {
        None
    };

    let mut report = pipeline.run(&source, ocr, pdf);
    if *sort == SortOrder::Priority {
        sort_by_priority(&mut report.findings);
    }

    emit(&report, *format, out_dir, pipeline.config().snippet_length)?;

    Ok(!report.findings.is_empty())
}

fn load_config(path: Option<&Path>) -> Result<ProofConfig> {
    if let Some(path) = path {
        return ProofConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ProofConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ProofConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ProofConfig::new())
}

fn emit(report: &RunReport, format: Format, out_dir: &Path, snippet_chars: usize) -> Result<()> {
    match format {
        Format::Text => output::text::output_text(report),
        Format::Json => output::json::output_json(report)?,
        Format::Csv => {
            let path = out_dir.join("review.csv");
            output::csv::write_csv(report, &path, snippet_chars).into_diagnostic()?;
            println!("CSV report written to {}", path.display());
            output::text::output_summary(report);
        }
    }
    Ok(())
}
