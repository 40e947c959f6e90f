//! CSV output formatter
//!
//! Writes a UTF-8 CSV with a BOM so spreadsheet tools pick up the encoding,
//! one row per finding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hanlint_core::{ExtractionMethod, RunReport};

const HEADER: &[&str] = &[
    "page",
    "method",
    "start",
    "end",
    "original",
    "suggestion",
    "checkers",
    "message",
    "diff",
    "snippet",
    "sentence",
];

pub fn write_csv(report: &RunReport, path: &Path, snippet_chars: usize) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    // BOM for spreadsheet tools that guess the encoding.
    out.write_all("\u{FEFF}".as_bytes())?;
    writeln!(out, "{}", HEADER.join(","))?;

    for finding in &report.findings {
        let method = match finding.method {
            ExtractionMethod::Native => "native",
            ExtractionMethod::Ocr => "ocr",
        };
        let row = [
            finding.page.to_string(),
            method.to_string(),
            finding.span.start.to_string(),
            finding.span.end.to_string(),
            finding.original.clone(),
            finding.suggestion.clone().unwrap_or_default(),
            finding.checkers.join(","),
            finding.message.clone().unwrap_or_default(),
            finding.diff.clone().unwrap_or_default(),
            finding.snippet(snippet_chars),
            finding.unit_text.clone(),
        ];
        let quoted: Vec<String> = row.iter().map(|field| quote(field)).collect();
        writeln!(out, "{}", quoted.join(","))?;
    }

    out.flush()
}

/// RFC 4180 quoting: wrap fields containing separators or quotes, doubling
/// embedded quotes.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
