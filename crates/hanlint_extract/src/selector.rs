//! Native-vs-OCR extraction decision.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hanlint_text::normalize;

use crate::{ExtractError, OcrEngine, PageSource};

/// How a page's text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Embedded text from the PDF content stream.
    Native,
    /// Recognized text from a rendered page image.
    Ocr,
}

/// A page of extracted, normalized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    /// Canonical page text (normalized exactly once at construction).
    pub text: String,
    /// Which extraction path produced the text.
    pub method: ExtractionMethod,
    /// Quality score of the accepted text, in [0, 1].
    pub quality: f64,
}

/// Tuning knobs for the native-quality heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Visible characters below which a native result is suspect.
    pub min_chars: usize,
    /// Native quality below this triggers the OCR fallback.
    pub quality_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_chars: 50,
            quality_threshold: 0.5,
        }
    }
}

/// Scores native extraction output.
///
/// A pure function of the text: visible-character count against `min_chars`,
/// the proportion of control/replacement garbage, and the presence of
/// whitespace structure in long runs. Returns a value in [0, 1].
pub fn native_quality(text: &str, min_chars: usize) -> f64 {
    let mut visible = 0usize;
    let mut whitespace = 0usize;
    let mut garbage = 0usize;

    for c in text.chars() {
        if c.is_whitespace() {
            whitespace += 1;
            continue;
        }
        visible += 1;
        if c == '\u{FFFD}' || c.is_control() {
            garbage += 1;
        }
    }

    if visible == 0 {
        return 0.0;
    }

    let length_score = (visible as f64 / min_chars.max(1) as f64).min(1.0);
    let garbage_score = 1.0 - garbage as f64 / visible as f64;
    // A long run with no whitespace at all is a glyph-soup symptom.
    let structure_score = if visible >= 120 && whitespace == 0 {
        0.5
    } else {
        1.0
    };

    (length_score * garbage_score * structure_score).clamp(0.0, 1.0)
}

/// Extracts one page, choosing native text or the OCR fallback.
///
/// Native extraction runs first and is scored; below the configured
/// threshold it is discarded and OCR output is accepted unconditionally.
/// With no OCR engine configured the native result is kept either way.
pub fn extract_page(
    source: &dyn PageSource,
    ocr: Option<&dyn OcrEngine>,
    page: u32,
    config: &SelectorConfig,
) -> Result<Page, ExtractError> {
    let native = source.extract_native(page)?;
    let quality = native_quality(&native, config.min_chars);

    if quality >= config.quality_threshold {
        return Ok(Page {
            number: page,
            text: normalize(&native),
            method: ExtractionMethod::Native,
            quality,
        });
    }

    let Some(engine) = ocr else {
        if quality > 0.0 {
            warn!(
                "Page {}: native quality {:.2} below threshold, OCR disabled; keeping native text",
                page, quality
            );
        }
        return Ok(Page {
            number: page,
            text: normalize(&native),
            method: ExtractionMethod::Native,
            quality,
        });
    };

    debug!(
        "Page {}: native quality {:.2} below threshold {:.2}, running OCR",
        page, quality, config.quality_threshold
    );

    let image = source.render_page_image(page)?;
    let recognized = engine.ocr(&image, page)?;
    let ocr_quality = native_quality(&recognized, config.min_chars);

    Ok(Page {
        number: page,
        text: normalize(&recognized),
        method: ExtractionMethod::Ocr,
        quality: ocr_quality,
    })
}
