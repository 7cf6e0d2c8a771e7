//! Document classification.
//!
//! Filename tokens are authoritative: dossiers follow a naming convention
//! and the filename rarely lies. Content markers are the fallback for
//! unnamed or renamed files. A document is classified exactly once.

use tracing::debug;

use crate::models::document::DocumentType;

/// Classify a document from its filename and decoded text.
///
/// Filename checks run in priority order so that compound names resolve
/// deterministically (CEE FINAL before CERTIFICADO, CONTRATO before
/// anything the contract body might mention). Falls back to content
/// markers, then `Unknown`.
pub fn classify(filename: &str, text: &str) -> DocumentType {
    let name = filename.to_uppercase();

    let by_name = if name.contains("CONTRATO") || name.contains("CONVENIO") {
        Some(DocumentType::Contract)
    } else if name.contains("FICHA") {
        Some(DocumentType::TemplateOnly)
    } else if name.contains("DECLARACION") || name.contains("DECLARACIÓN") {
        Some(DocumentType::Declaration)
    } else if name.contains("FACTURA") {
        Some(DocumentType::Invoice)
    } else if name.contains("FOTOGRAFICO") || name.contains("FOTOGRÁFICO") {
        Some(DocumentType::PhotographicReport)
    } else if name.contains("CEE") && name.contains("FINAL") {
        Some(DocumentType::CeeFinal)
    } else if name.contains("CERTIFICADO") {
        Some(DocumentType::InstallerCertificate)
    } else if name.contains("REGISTRO") {
        Some(DocumentType::CeeRegistration)
    } else if name.contains("DNI") {
        Some(DocumentType::NationalId)
    } else if name.contains("CALCULO") || name.contains("CÁLCULO") {
        Some(DocumentType::CalculationSheet)
    } else {
        None
    };

    if let Some(doc_type) = by_name {
        debug!(%filename, %doc_type, "classified by filename");
        return doc_type;
    }

    let doc_type = classify_by_content(text);
    debug!(%filename, %doc_type, "classified by content");
    doc_type
}

fn classify_by_content(text: &str) -> DocumentType {
    let upper = text.to_uppercase();

    if upper.contains("CESION DE AHORROS")
        || upper.contains("CESIÓN DE AHORROS")
        || (upper.contains("CESIONARIO") && upper.contains("CEDENTE"))
    {
        DocumentType::Contract
    } else if upper.contains("DECLARACION RESPONSABLE") || upper.contains("DECLARACIÓN RESPONSABLE")
    {
        DocumentType::Declaration
    } else if upper.contains("CERTIFICADO DE EFICIENCIA ENERGETICA")
        || upper.contains("CERTIFICADO DE EFICIENCIA ENERGÉTICA")
    {
        DocumentType::CeeFinal
    } else if upper.contains("REGISTRO") && upper.contains("EFICIENCIA") {
        DocumentType::CeeRegistration
    } else if upper.contains("CERTIFICADO DE INSTALADOR") {
        DocumentType::InstallerCertificate
    } else if upper.contains("FACTURA") {
        DocumentType::Invoice
    } else if upper.contains("INFORME FOTOGRAFICO") || upper.contains("INFORME FOTOGRÁFICO") {
        DocumentType::PhotographicReport
    } else if upper.contains("DOCUMENTO NACIONAL DE IDENTIDAD") || upper.contains("IDESP") {
        DocumentType::NationalId
    } else {
        DocumentType::Unknown
    }
}
