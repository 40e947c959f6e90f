//! Extraction error types.

use thiserror::Error;

/// Errors that can occur while extracting page text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The PDF container could not be opened or parsed.
    #[error("Failed to open document: {0}")]
    Open(String),

    /// Native text extraction failed for a page.
    #[error("Native extraction failed for page {page}: {message}")]
    Native { page: u32, message: String },

    /// Page rendering failed (missing tool, bad status).
    #[error("Failed to render page {page}: {message}")]
    Render { page: u32, message: String },

    /// The OCR engine failed or produced unusable output.
    #[error("OCR failed for page {page}: {message}")]
    Ocr { page: u32, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Creates an open error.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open(message.into())
    }

    /// Creates a native-extraction error.
    pub fn native(page: u32, message: impl Into<String>) -> Self {
        Self::Native {
            page,
            message: message.into(),
        }
    }

    /// Creates a render error.
    pub fn render(page: u32, message: impl Into<String>) -> Self {
        Self::Render {
            page,
            message: message.into(),
        }
    }

    /// Creates an OCR error.
    pub fn ocr(page: u32, message: impl Into<String>) -> Self {
        Self::Ocr {
            page,
            message: message.into(),
        }
    }
}
