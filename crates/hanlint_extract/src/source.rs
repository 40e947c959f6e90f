//! Page source abstraction over a PDF document.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lopdf::Document as LopdfDocument;
use tracing::{debug, warn};

use crate::ExtractError;

/// An opaque provider of document pages.
///
/// The pipeline consumes pages only through this trait, so tests can inject
/// fake sources without a real PDF.
pub trait PageSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracts native (embedded) text for a 1-based page number.
    ///
    /// An empty string is a valid result for image-only pages.
    fn extract_native(&self, page: u32) -> Result<String, ExtractError>;

    /// Renders a 1-based page to an image file and returns its path.
    fn render_page_image(&self, page: u32) -> Result<PathBuf, ExtractError>;
}

/// A PDF file on disk.
///
/// Native text is extracted for all pages up front with `pdf-extract`;
/// rendering shells out to `pdftoppm` on demand.
pub struct PdfFile {
    path: PathBuf,
    page_texts: Vec<String>,
    render_dir: PathBuf,
    dpi: u32,
}

impl PdfFile {
    /// Default render resolution; enough for OCR without huge intermediates.
    pub const DEFAULT_DPI: u32 = 180;

    /// Opens a PDF and extracts native text for every page.
    pub fn open(path: impl AsRef<Path>, render_dir: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)?;

        let doc = LopdfDocument::load_mem(&bytes)
            .map_err(|e| ExtractError::open(format!("{}: {}", path.display(), e)))?;
        let page_count = doc.get_pages().len();

        let page_texts = match pdf_extract::extract_text_from_mem_by_pages(&bytes) {
            Ok(mut texts) => {
                // pdf-extract and lopdf occasionally disagree on page count
                // for malformed documents; trust lopdf and pad with empties.
                texts.resize(page_count, String::new());
                texts
            }
            Err(e) => {
                warn!("Native extraction failed for {}: {}", path.display(), e);
                vec![String::new(); page_count]
            }
        };

        debug!(
            "Opened {} ({} pages, {} with native text)",
            path.display(),
            page_count,
            page_texts.iter().filter(|t| !t.trim().is_empty()).count()
        );

        Ok(Self {
            path,
            page_texts,
            render_dir: render_dir.as_ref().to_path_buf(),
            dpi: Self::DEFAULT_DPI,
        })
    }

    /// Overrides the render resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

impl PageSource for PdfFile {
    fn page_count(&self) -> usize {
        self.page_texts.len()
    }

    fn extract_native(&self, page: u32) -> Result<String, ExtractError> {
        self.page_texts
            .get(page as usize - 1)
            .cloned()
            .ok_or_else(|| ExtractError::native(page, "page out of range"))
    }

    fn render_page_image(&self, page: u32) -> Result<PathBuf, ExtractError> {
        fs::create_dir_all(&self.render_dir)?;

        let prefix = self.render_dir.join(format!("page_{:04}", page));
        let prefix_str = prefix
            .to_str()
            .ok_or_else(|| ExtractError::render(page, "non-UTF8 render path"))?;

        // pdftoppm uses 1-based page indices and appends "-<page>.png".
        let status = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg(&self.path)
            .arg(prefix_str)
            .status()
            .map_err(|e| {
                ExtractError::render(page, format!("failed to invoke pdftoppm: {}", e))
            })?;

        if !status.success() {
            return Err(ExtractError::render(
                page,
                format!("pdftoppm exited with {}", status),
            ));
        }

        let image_path = self.render_dir.join(format!("page_{:04}-{}.png", page, page));
        if !image_path.exists() {
            return Err(ExtractError::render(
                page,
                format!("rendered image not found: {}", image_path.display()),
            ));
        }

        Ok(image_path)
    }
}
