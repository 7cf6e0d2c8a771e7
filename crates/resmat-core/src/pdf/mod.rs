//! PDF loading, analysis and text extraction.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::Result;

/// How a PDF stores its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Embedded text layer, extractable directly.
    Text,
    /// Scanned pages, images only. Text extraction yields nothing.
    Image,
    /// Some embedded text plus page images.
    Hybrid,
    /// No usable content.
    Empty,
}

/// Trait for PDF processing backends.
pub trait PdfProcessor {
    /// Load a PDF from raw bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> usize;

    /// Determine how the loaded document stores its content.
    fn analyze(&self) -> Result<PdfType>;

    /// Extract the embedded text layer.
    fn extract_text(&self) -> Result<String>;
}
