//! lopdf/pdf-extract based PDF backend.

use lopdf::{Document, Object};
use tracing::{debug, warn};

use super::{PdfProcessor, PdfType};
use crate::error::{PdfError, Result};

/// Minimum characters of embedded text for a document to count as text-based.
const MIN_TEXT_LENGTH: usize = 50;

/// PDF backend built on `lopdf` for structure and `pdf-extract` for text.
#[derive(Default)]
pub struct PdfTextExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()).into())
    }

    /// Count image XObjects across the document. Streams are not decoded,
    /// only their dictionaries are inspected.
    fn count_images(doc: &Document) -> usize {
        doc.objects
            .values()
            .filter(|obj| {
                if let Object::Stream(stream) = obj {
                    stream
                        .dict
                        .get(b"Subtype")
                        .and_then(|s| s.as_name())
                        .map(|name| name == b"Image")
                        .unwrap_or(false)
                } else {
                    false
                }
            })
            .count()
    }
}

impl PdfProcessor for PdfTextExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            // Many scanners emit PDFs locked with an empty owner password.
            document.decrypt("").map_err(|_| PdfError::Encrypted)?;

            // pdf-extract needs the decrypted bytes, not the originals.
            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {e}")))?;
            self.raw_data = decrypted;
        } else {
            self.raw_data = data.to_vec();
        }

        if document.get_pages().is_empty() {
            return Err(PdfError::NoPages.into());
        }

        debug!(pages = document.get_pages().len(), "PDF loaded");
        self.document = Some(document);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map(|d| d.get_pages().len())
            .unwrap_or(0)
    }

    fn analyze(&self) -> Result<PdfType> {
        let doc = self.document()?;
        let images = Self::count_images(doc);
        let text_len = match self.extract_text() {
            Ok(text) => text.trim().len(),
            Err(e) => {
                warn!("text probe failed during analysis: {e}");
                0
            }
        };

        let pdf_type = match (text_len >= MIN_TEXT_LENGTH, images > 0) {
            (true, true) => PdfType::Hybrid,
            (true, false) => PdfType::Text,
            (false, true) => PdfType::Image,
            (false, false) => PdfType::Empty,
        };
        debug!(?pdf_type, text_len, images, "PDF analyzed");
        Ok(pdf_type)
    }

    fn extract_text(&self) -> Result<String> {
        self.document()?;
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfTextExtractor::new();
        assert!(extractor.load(b"this is not a pdf").is_err());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_analyze_requires_loaded_document() {
        let extractor = PdfTextExtractor::new();
        assert!(extractor.analyze().is_err());
        assert!(extractor.extract_text().is_err());
    }
}
