//! Text output formatter

use hanlint_core::{ExtractionMethod, RunReport};

pub fn output_text(report: &RunReport) {
    let mut current_page = 0;

    for finding in &report.findings {
        if finding.page != current_page {
            current_page = finding.page;
            let method = match finding.method {
                ExtractionMethod::Native => "native",
                ExtractionMethod::Ocr => "ocr",
            };
            println!("\npage {} ({}):", finding.page, method);
        }

        let arrow = match &finding.suggestion {
            Some(suggestion) => format!("{} → {}", finding.original, suggestion),
            None => finding.original.clone(),
        };
        print!(
            "  {}:{} [{}] {}",
            finding.span.start,
            finding.span.end,
            finding.checkers.join(","),
            arrow
        );
        if let Some(diff) = &finding.diff {
            print!("  {}", diff);
        }
        if let Some(message) = &finding.message {
            print!("  ({})", message);
        }
        println!();
    }

    output_summary(report);

    if !report.warnings.is_empty() {
        eprintln!("\n{} warning(s):", report.warnings.len());
        for warning in &report.warnings {
            match warning.unit_span {
                Some(span) => eprintln!(
                    "  page {} [{}] at {}:{}: {}",
                    warning.page, warning.source, span.start, span.end, warning.message
                ),
                None => eprintln!(
                    "  page {} [{}]: {}",
                    warning.page, warning.source, warning.message
                ),
            }
        }
    }
}

pub fn output_summary(report: &RunReport) {
    let stats = &report.stats;
    println!();
    println!(
        "Checked {} units on {} pages, found {} issue(s) in {} unit(s)",
        stats.units, stats.pages, stats.findings, stats.flagged_units
    );

    if !stats.by_checker.is_empty() {
        println!("\nFindings by checker:");
        for (checker, count) in &stats.by_checker {
            println!("  {:<15} {}", checker, count);
        }
    }
}
