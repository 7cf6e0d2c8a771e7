//! Document types, raw documents and per-document field maps.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::catalog::CanonicalField;

/// The eleven document categories of a residential dossier.
///
/// Assigned once at classification time and never changed afterwards.
/// Variant order matches the column order of the correspondence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Contrato de cesión de ahorros (savings assignment contract).
    Contract,
    /// Ficha RES020/RES010 - a filled template carrying no per-case data.
    TemplateOnly,
    /// Declaración responsable signed by the homeowner.
    Declaration,
    /// Factura (invoice) for the works.
    Invoice,
    /// Informe fotográfico - photos only, deliberately never parsed.
    PhotographicReport,
    /// Certificado del instalador (installer certificate).
    InstallerCertificate,
    /// Certificado de eficiencia energética final.
    CeeFinal,
    /// Registro del CEE (energy certificate registration).
    CeeRegistration,
    /// DNI scan of the homeowner.
    NationalId,
    /// Calculation spreadsheet - parsed by an external collaborator, if at all.
    CalculationSheet,
    /// Anything the classifier could not place. Contributes no fields.
    Unknown,
}

impl DocumentType {
    /// All document types in fixed matrix column order.
    pub const CATALOG: [DocumentType; 11] = [
        DocumentType::Contract,
        DocumentType::TemplateOnly,
        DocumentType::Declaration,
        DocumentType::Invoice,
        DocumentType::PhotographicReport,
        DocumentType::InstallerCertificate,
        DocumentType::CeeFinal,
        DocumentType::CeeRegistration,
        DocumentType::NationalId,
        DocumentType::CalculationSheet,
        DocumentType::Unknown,
    ];

    /// Column header as it appears in the output matrix.
    pub fn column_label(&self) -> &'static str {
        match self {
            DocumentType::Contract => "E1-1-1 CONTRATO CESION AHORROS",
            DocumentType::TemplateOnly => "E1-3-1 FICHA RES020 010",
            DocumentType::Declaration => "E1-3-2 DECLARACION RESPONSABLE",
            DocumentType::Invoice => "E1-3-3 FACTURA",
            DocumentType::PhotographicReport => "E1-3-4 INFORME FOTOGRAFICO",
            DocumentType::InstallerCertificate => "E1-3-5 CERTIFICADO INSTALADOR",
            DocumentType::CeeFinal => "E1-3-6-1 CEE FINAL",
            DocumentType::CeeRegistration => "E1-3-6-2 REGISTRO CEE",
            DocumentType::NationalId => "E1-4-1 DNI",
            DocumentType::CalculationSheet => "E1-4-2 CALCULO UI RTOTAL",
            DocumentType::Unknown => "SIN CLASIFICAR",
        }
    }

    /// Whether documents of this type can contribute field values to a case.
    ///
    /// Template-only and photographic documents carry no per-case data;
    /// unknown documents are skipped entirely. Calculation sheets count as
    /// data-bearing because an external parser may supply a field map.
    pub fn is_data_bearing(&self) -> bool {
        !matches!(
            self,
            DocumentType::TemplateOnly | DocumentType::PhotographicReport | DocumentType::Unknown
        )
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::Contract => "CONTRATO",
            DocumentType::TemplateOnly => "FICHA",
            DocumentType::Declaration => "DECLARACION",
            DocumentType::Invoice => "FACTURA",
            DocumentType::PhotographicReport => "INFORME FOTOGRAFICO",
            DocumentType::InstallerCertificate => "CERTIFICADO",
            DocumentType::CeeFinal => "CEE FINAL",
            DocumentType::CeeRegistration => "REGISTRO",
            DocumentType::NationalId => "DNI",
            DocumentType::CalculationSheet => "CALCULO",
            DocumentType::Unknown => "DESCONOCIDO",
        };
        f.write_str(name)
    }
}

/// One input document as handed over by the PDF decoder.
///
/// `raw_text` may be empty (scanned/image-only source) or carry encoding
/// artifacts; it is consumed immediately by classification and extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Path the document was read from.
    pub source_path: PathBuf,
    /// Classified document type.
    pub document_type: DocumentType,
    /// Decoded text, possibly empty.
    pub raw_text: String,
}

impl RawDocument {
    pub fn new(
        source_path: impl Into<PathBuf>,
        document_type: DocumentType,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            document_type,
            raw_text: raw_text.into(),
        }
    }
}

/// Extraction result for one document: canonical field -> value.
///
/// A field missing from the map is "absent" - the valid, expected outcome
/// when no rule matched. Absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    values: BTreeMap<CanonicalField, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an extracted value for a field.
    pub fn insert(&mut self, field: CanonicalField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Extracted value for a field, or `None` when absent.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate extracted (field, value) pairs in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> + '_ {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_variants() {
        assert_eq!(DocumentType::CATALOG.len(), 11);
        // Unknown comes last so it renders as the trailing matrix column.
        assert_eq!(DocumentType::CATALOG[10], DocumentType::Unknown);
    }

    #[test]
    fn test_data_bearing() {
        assert!(DocumentType::Contract.is_data_bearing());
        assert!(DocumentType::CalculationSheet.is_data_bearing());
        assert!(!DocumentType::TemplateOnly.is_data_bearing());
        assert!(!DocumentType::PhotographicReport.is_data_bearing());
        assert!(!DocumentType::Unknown.is_data_bearing());
    }

    #[test]
    fn test_field_map_absent_by_default() {
        let map = FieldMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(CanonicalField::OwnerName), None);
    }
}
