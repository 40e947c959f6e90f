//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// hanlint - Korean PDF proofreading assistant
#[derive(Parser)]
#[command(name = "hanlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Proofread a PDF document
    Check {
        /// PDF file to check
        pdf: PathBuf,

        /// Output directory for reports and rendered pages
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Finding order in the report
        #[arg(long, value_enum, default_value = "position")]
        sort: SortOrder,

        /// Checkers to enable, highest precedence first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        checkers: Option<Vec<String>>,

        /// Minimum Hangul ratio for a unit to be checked
        #[arg(long)]
        korean_ratio: Option<f64>,

        /// Minimum unit length in characters
        #[arg(long)]
        min_length: Option<usize>,

        /// Disable the OCR fallback
        #[arg(long)]
        no_ocr: bool,

        /// Character count below which native extraction is suspect
        #[arg(long)]
        ocr_threshold: Option<usize>,

        /// YAML rules file for the rule checker
        #[arg(long)]
        rules_path: Option<PathBuf>,

        /// Whitelist file of known false positives
        #[arg(long)]
        whitelist_path: Option<PathBuf>,

        /// Per-checker timeout in milliseconds (0 disables)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable listing on stdout
    Text,
    /// Full report as JSON on stdout
    Json,
    /// Spreadsheet-compatible CSV in the output directory
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Document order: page, then offset
    Position,
    /// Review order: rule hits first, then multi-checker findings
    Priority,
}
