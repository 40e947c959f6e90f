//! Sentence splitting for Korean page text.

use crate::Span;

/// A sentence unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The text content of the sentence, trimmed of surrounding whitespace.
    pub text: String,
    /// The byte range of the trimmed sentence in the original text.
    pub span: Span,
}

/// Splits page text into sentence-like units.
///
/// Page text is expected to be normalized (single newlines, collapsed
/// spaces); see `normalize`.
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Splits text into sentences.
    ///
    /// Boundary rules:
    /// - `。` (ideographic full stop) always ends a sentence.
    /// - `.`, `!`, `?` and their fullwidth variants end a sentence only when
    ///   followed by whitespace or end of text, so `1.5배` and `example.com`
    ///   stay whole.
    /// - A Hangul declarative ending (`다`, `요`, `죠`, `네`) followed by a
    ///   newline ends a sentence; mid-phrase hard wraps are joined.
    pub fn split(text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();
        let mut prev_char: Option<char> = None;

        while let Some((idx, c)) = chars.next() {
            let is_sentence_end = match c {
                '。' => true,
                '！' | '？' | '!' | '?' | '.' => match chars.peek() {
                    Some((_, next_c)) => next_c.is_whitespace(),
                    None => true,
                },
                '\n' => matches!(prev_char, Some('다' | '요' | '죠' | '네')),
                _ => false,
            };

            if is_sentence_end {
                let end = idx + c.len_utf8();
                push_trimmed(&mut sentences, text, start, end);
                start = end;
            }

            prev_char = Some(c);
        }

        if start < text.len() {
            push_trimmed(&mut sentences, text, start, text.len());
        }

        sentences
    }
}

/// Pushes `text[start..end]` shrunk to its non-whitespace core, if any.
fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    let span = Span::new(start + lead, start + lead + trimmed.len());
    sentences.push(Sentence {
        text: trimmed.to_string(),
        span,
    });
}
