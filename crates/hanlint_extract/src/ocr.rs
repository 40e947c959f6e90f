//! OCR engine abstraction and the Tesseract command bridge.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::ExtractError;

/// An opaque OCR service: image in, recognized text out.
pub trait OcrEngine: Send + Sync {
    /// Recognizes text in the given image file.
    fn ocr(&self, image: &Path, page: u32) -> Result<String, ExtractError>;
}

/// Bridge to the `tesseract` command-line tool.
///
/// Recognition is bounded by a deadline; a hung process is killed and
/// reported as an OCR failure for that page, never stalling the document.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    lang: String,
    timeout: Duration,
}

impl TesseractOcr {
    /// Default per-page recognition deadline.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    /// Creates a bridge with the default Korean+English language pack.
    pub fn new() -> Self {
        Self {
            lang: "kor+eng".to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the tesseract language specification.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Overrides the per-page recognition deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn wait_with_deadline(&self, child: &mut Child, page: u32) -> Result<(), ExtractError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return Ok(()),
                Ok(Some(status)) => {
                    return Err(ExtractError::ocr(
                        page,
                        format!("tesseract exited with {}", status),
                    ));
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ExtractError::ocr(
                            page,
                            format!("tesseract timed out after {:?}", self.timeout),
                        ));
                    }
                    std::thread::sleep(Duration::from_millis(50));
                }
                Err(e) => return Err(ExtractError::ocr(page, e.to_string())),
            }
        }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn ocr(&self, image: &Path, page: u32) -> Result<String, ExtractError> {
        // "stdout" as the output base makes tesseract print the recognized
        // text instead of writing a sidecar file.
        let mut child = Command::new("tesseract")
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ExtractError::ocr(page, format!("failed to invoke tesseract: {}", e))
            })?;

        // Drain stdout on a separate thread so a full pipe cannot block the
        // child while we poll for its exit.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExtractError::ocr(page, "tesseract stdout unavailable"))?;
        let reader = std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            buf
        });

        self.wait_with_deadline(&mut child, page)?;

        let bytes = reader
            .join()
            .map_err(|_| ExtractError::ocr(page, "stdout reader panicked"))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        debug!("OCR page {}: {} bytes recognized", page, text.len());
        Ok(text)
    }
}
