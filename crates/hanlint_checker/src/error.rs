//! Checker error types.

use thiserror::Error;

/// Errors a checker can raise.
///
/// Per-unit failures are recovered by the orchestrator (the checker simply
/// contributes nothing for that unit); construction-time failures such as an
/// invalid rule pattern are configuration errors and abort the run.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The checker's backing service is unreachable or misconfigured.
    #[error("Checker unavailable: {0}")]
    Unavailable(String),

    /// A request to an external service failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// An external service returned data we cannot interpret.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// A rule definition failed to compile.
    #[error("Invalid rule '{name}': {message}")]
    InvalidRule { name: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckerError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates an invalid-rule error.
    pub fn invalid_rule(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            name: name.into(),
            message: message.into(),
        }
    }
}
