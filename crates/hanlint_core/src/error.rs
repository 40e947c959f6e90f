//! Pipeline error types.

use thiserror::Error;

/// Errors that abort a proofreading run.
///
/// Per-page and per-checker failures do not appear here; they degrade to
/// [`RunWarning`](crate::RunWarning)s and the run continues.
#[derive(Debug, Error)]
pub enum ProofError {
    /// Configuration error (no checkers, bad thresholds, malformed files).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document itself could not be opened.
    #[error("Extraction error: {0}")]
    Extract(#[from] hanlint_extract::ExtractError),

    /// A checker failed to construct (invalid rules, bad endpoint).
    #[error("Checker error: {0}")]
    Checker(#[from] hanlint_checker::CheckerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProofError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
