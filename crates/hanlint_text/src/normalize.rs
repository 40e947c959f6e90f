//! Text normalization for extracted page text.
//!
//! PDF extraction and OCR both leave artifacts behind: control characters,
//! soft hyphens, zero-width joiners, runs of spaces from justified layout.
//! Normalization happens exactly once, before a page is constructed, so that
//! all downstream offsets refer to a single canonical text.

use unicode_normalization::UnicodeNormalization;

/// Returns true for control characters that never belong in prose.
///
/// Newlines and tabs are kept; tabs are folded into spaces later.
#[inline]
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Returns true for invisible formatting characters dropped outright.
#[inline]
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{AD}' | '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Normalizes raw extracted text into canonical page text.
///
/// Applies NFKC, strips control and zero-width characters, collapses
/// horizontal whitespace runs to a single space and newline runs to a single
/// newline, and trims the result.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut pending_newline = false;

    for c in text.nfkc() {
        if is_stripped_control(c) || is_invisible(c) {
            continue;
        }
        if c == '\n' || c == '\r' {
            pending_newline = true;
            pending_space = false;
            continue;
        }
        if c == ' ' || c == '\t' || c == '\u{A0}' {
            if !pending_newline {
                pending_space = true;
            }
            continue;
        }
        if pending_newline {
            if !out.is_empty() {
                out.push('\n');
            }
            pending_newline = false;
        } else if pending_space {
            if !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }

    out
}
