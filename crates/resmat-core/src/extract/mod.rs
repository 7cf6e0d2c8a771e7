//! Per-document-type field extraction.
//!
//! Each data-bearing document type has a static [`RuleSet`] in its own
//! module. [`DocumentExtractor`] dispatches on document type and applies
//! extraction settings; [`extract_document`] is the one-call convenience
//! path used by the CLI.

pub mod cee;
pub mod certificado;
pub mod contrato;
pub mod declaracion;
pub mod dni_doc;
pub mod factura;
pub mod registro;

use tracing::debug;

use crate::models::catalog::CanonicalField;
use crate::models::document::{DocumentType, FieldMap, RawDocument};
use crate::normalize::normalize;
use crate::rules::RuleSet;

/// The rule set for a document type, or `None` for types that are never
/// parsed (templates, photo reports, spreadsheets, unknowns).
pub fn ruleset_for(doc_type: DocumentType) -> Option<&'static RuleSet> {
    match doc_type {
        DocumentType::Contract => Some(&contrato::RULES),
        DocumentType::Declaration => Some(&declaracion::RULES),
        DocumentType::Invoice => Some(&factura::RULES),
        DocumentType::InstallerCertificate => Some(&certificado::RULES),
        DocumentType::CeeFinal => Some(&cee::RULES),
        DocumentType::CeeRegistration => Some(&registro::RULES),
        DocumentType::NationalId => Some(&dni_doc::RULES),
        DocumentType::TemplateOnly
        | DocumentType::PhotographicReport
        | DocumentType::CalculationSheet
        | DocumentType::Unknown => None,
    }
}

/// Configurable extraction front end.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    validate_dni: bool,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self { validate_dni: true }
    }

    /// Toggle the DNI checksum gate.
    ///
    /// With validation off, a DNI-shaped token that fails the checksum is
    /// still reported rather than dropped.
    pub fn with_dni_validation(mut self, validate: bool) -> Self {
        self.validate_dni = validate;
        self
    }

    /// Extract fields from already-normalized text of a classified document.
    pub fn extract(&self, doc_type: DocumentType, text: &str) -> FieldMap {
        let Some(rules) = ruleset_for(doc_type) else {
            return FieldMap::new();
        };
        let mut map = rules.apply(text);

        if !self.validate_dni && map.get(CanonicalField::NationalId).is_none() {
            if let Some(raw) = lenient_dni(text) {
                map.insert(CanonicalField::NationalId, raw);
            }
        }

        debug!(%doc_type, fields = map.len(), "extraction finished");
        map
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First DNI-shaped token regardless of checksum.
fn lenient_dni(text: &str) -> Option<String> {
    use lazy_static::lazy_static;
    use regex::Regex;
    lazy_static! {
        static ref SHAPE: Regex = Regex::new(r"\b(\d{8}[A-Z])\b").unwrap();
    }
    SHAPE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Normalize and extract a raw document with default settings.
pub fn extract_document(doc: &RawDocument) -> FieldMap {
    let text = normalize(&doc.raw_text);
    DocumentExtractor::new().extract(doc.document_type, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsed_types_yield_empty_maps() {
        let extractor = DocumentExtractor::new();
        for doc_type in [
            DocumentType::TemplateOnly,
            DocumentType::PhotographicReport,
            DocumentType::CalculationSheet,
            DocumentType::Unknown,
        ] {
            assert!(extractor.extract(doc_type, "DON JUAN GARCIA 12345678Z").is_empty());
        }
    }

    #[test]
    fn test_lenient_dni_fallback() {
        // 12345678A fails the checksum; strict mode drops it, lenient keeps it.
        let text = "Cliente: ACME\nD.N.I.: 12345678A\n";
        let strict = DocumentExtractor::new().extract(DocumentType::Invoice, text);
        assert_eq!(strict.get(CanonicalField::NationalId), None);

        let lenient = DocumentExtractor::new()
            .with_dni_validation(false)
            .extract(DocumentType::Invoice, text);
        assert_eq!(lenient.get(CanonicalField::NationalId), Some("12345678A"));
    }

    #[test]
    fn test_extract_document_normalizes_first() {
        let doc = RawDocument::new(
            "case/CERTIFICADO.pdf",
            DocumentType::InstallerCertificate,
            "situado en Calle   Mayor 12, Le6n\n",
        );
        let map = extract_document(&doc);
        assert_eq!(map.get(CanonicalField::ActAddress), Some("Calle Mayor 12, León"));
    }
}
