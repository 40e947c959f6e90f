//! # hanlint_text
//!
//! Text analysis components for hanlint:
//! - byte-offset [`Span`] used throughout the pipeline
//! - extraction-output [`normalize`] pass
//! - Korean sentence [`SentenceSplitter`]
//! - Hangul classification and [`korean_ratio`] scoring
//! - bracketed correction diffs ([`render_diff`])

mod diff;
mod korean;
mod normalize;
mod span;
mod splitter;
mod unit;

pub use diff::render_diff;
pub use korean::{is_hangul_jamo, is_hangul_syllable, korean_ratio};
pub use normalize::normalize;
pub use span::Span;
pub use splitter::{Sentence, SentenceSplitter};
pub use unit::TextUnit;
