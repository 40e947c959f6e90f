//! # hanlint_extract
//!
//! Page-level text acquisition for hanlint:
//! - [`PageSource`] abstraction with a `lopdf`/`pdf-extract` implementation
//! - [`OcrEngine`] abstraction with a Tesseract command bridge
//! - the extraction selector deciding native text vs. OCR per page

mod error;
mod ocr;
mod selector;
mod source;

pub use error::ExtractError;
pub use ocr::{OcrEngine, TesseractOcr};
pub use selector::{extract_page, native_quality, ExtractionMethod, Page, SelectorConfig};
pub use source::{PageSource, PdfFile};
