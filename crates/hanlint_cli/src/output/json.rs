//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use hanlint_core::RunReport;

pub fn output_json(report: &RunReport) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(report).into_diagnostic()?
    );
    Ok(())
}
