//! # hanlint_checker
//!
//! The checker capability and its built-in implementations.
//!
//! A [`Checker`] takes one sentence unit and returns zero or more
//! [`RawIssue`]s. The orchestrator in `hanlint_core` depends only on this
//! trait; any subset of checkers may be enabled per run, and new checkers
//! plug in without touching the merge logic.

mod cache;
mod error;
mod issue;
mod language_tool;
mod rules;
mod spacing;
mod spelling;
mod whitelist;

pub use cache::CheckCache;
pub use error::CheckerError;
pub use issue::RawIssue;
pub use language_tool::LanguageToolChecker;
pub use rules::{RuleChecker, RuleDefinition};
pub use spacing::SpacingChecker;
pub use spelling::SpellingChecker;
pub use whitelist::{Whitelist, WhitelistEntry};

/// A named detector over sentence units.
///
/// Implementations must tolerate arbitrary input text and report issues with
/// unit-relative byte spans. Errors are recovered per unit by the caller.
pub trait Checker: Send + Sync {
    /// Stable checker name used for provenance and precedence.
    fn name(&self) -> &str;

    /// Checks one unit of text.
    fn check(&self, text: &str) -> Result<Vec<RawIssue>, CheckerError>;
}
