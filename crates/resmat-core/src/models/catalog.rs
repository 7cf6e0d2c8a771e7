//! Canonical field catalog and the field/document applicability table.
//!
//! The catalog fixes which fields exist, which matrix section each one
//! belongs to, and which document types may legitimately carry each field.
//! A (field, document type) pair outside the applicability table is a
//! structural blank in the matrix, distinct from an applicable-but-absent
//! cell.

use serde::{Deserialize, Serialize};

use super::document::DocumentType;

/// The twenty-two canonical fields of a case.
///
/// Variant order matches the row order of the correspondence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    // HOME OWNER
    OwnerName,
    NationalId,
    OwnerAddress,
    Phone,
    Email,
    SignaturePresent,
    // ACT
    ProjectCode,
    EnergySavings,
    StartDate,
    FinishDate,
    ActAddress,
    CatastralReference,
    UtmCoordinates,
    LifespanYears,
    SurfaceArea,
    ClimateZone,
    SellPricePerKwh,
    // DOCUMENT
    InvoiceNumber,
    InvoiceDate,
    Amount,
    RegistrationNumber,
    CertificateDate,
}

impl CanonicalField {
    /// Row label as it appears in the output matrix.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::OwnerName => "Name",
            CanonicalField::NationalId => "DNI",
            CanonicalField::OwnerAddress => "Address",
            CanonicalField::Phone => "Phone number",
            CanonicalField::Email => "Mail",
            CanonicalField::SignaturePresent => "Signatures (+format)",
            CanonicalField::ProjectCode => "Code (010/020)",
            CanonicalField::EnergySavings => "Energy savings (kWh)",
            CanonicalField::StartDate => "Start date",
            CanonicalField::FinishDate => "Finish date",
            CanonicalField::ActAddress => "Address",
            CanonicalField::CatastralReference => "Catastral ref",
            CanonicalField::UtmCoordinates => "UTM coordinates",
            CanonicalField::LifespanYears => "Lifespan (a\u{f1}os)",
            CanonicalField::SurfaceArea => "Surface (m2)",
            CanonicalField::ClimateZone => "Climatic zone",
            CanonicalField::SellPricePerKwh => "Sell price (\u{20ac}/kWh)",
            CanonicalField::InvoiceNumber => "Invoice number",
            CanonicalField::InvoiceDate => "Invoice date",
            CanonicalField::Amount => "Amount (\u{20ac})",
            CanonicalField::RegistrationNumber => "Registration number",
            CanonicalField::CertificateDate => "Certification date",
        }
    }
}

/// One section of the matrix: a header row followed by its field rows.
pub struct CatalogSection {
    pub header: &'static str,
    pub fields: &'static [CanonicalField],
}

/// The full row catalog in output order.
pub const CATALOG: &[CatalogSection] = &[
    CatalogSection {
        header: "HOME OWNER",
        fields: &[
            CanonicalField::OwnerName,
            CanonicalField::NationalId,
            CanonicalField::OwnerAddress,
            CanonicalField::Phone,
            CanonicalField::Email,
            CanonicalField::SignaturePresent,
        ],
    },
    CatalogSection {
        header: "ACT",
        fields: &[
            CanonicalField::ProjectCode,
            CanonicalField::EnergySavings,
            CanonicalField::StartDate,
            CanonicalField::FinishDate,
            CanonicalField::ActAddress,
            CanonicalField::CatastralReference,
            CanonicalField::UtmCoordinates,
            CanonicalField::LifespanYears,
            CanonicalField::SurfaceArea,
            CanonicalField::ClimateZone,
            CanonicalField::SellPricePerKwh,
        ],
    },
    CatalogSection {
        header: "DOCUMENT",
        fields: &[
            CanonicalField::InvoiceNumber,
            CanonicalField::InvoiceDate,
            CanonicalField::Amount,
            CanonicalField::RegistrationNumber,
            CanonicalField::CertificateDate,
        ],
    },
];

/// Which document types may carry each canonical field.
///
/// Pairs not listed here never receive a value, regardless of what an
/// extractor produced.
pub const APPLICABILITY: &[(CanonicalField, &[DocumentType])] = &[
    (
        CanonicalField::OwnerName,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::Invoice,
            DocumentType::NationalId,
            DocumentType::CalculationSheet,
        ],
    ),
    (
        CanonicalField::NationalId,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::Invoice,
            DocumentType::NationalId,
        ],
    ),
    (
        CanonicalField::OwnerAddress,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::Invoice,
        ],
    ),
    (CanonicalField::Phone, &[DocumentType::Contract]),
    (CanonicalField::Email, &[DocumentType::Contract]),
    (
        CanonicalField::SignaturePresent,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::CeeFinal,
        ],
    ),
    (
        CanonicalField::ProjectCode,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::InstallerCertificate,
            DocumentType::CalculationSheet,
        ],
    ),
    (
        CanonicalField::EnergySavings,
        &[
            DocumentType::Contract,
            DocumentType::InstallerCertificate,
            DocumentType::CalculationSheet,
        ],
    ),
    (CanonicalField::StartDate, &[DocumentType::InstallerCertificate]),
    (CanonicalField::FinishDate, &[DocumentType::InstallerCertificate]),
    (
        CanonicalField::ActAddress,
        &[
            DocumentType::Contract,
            DocumentType::InstallerCertificate,
            DocumentType::CeeFinal,
            DocumentType::CeeRegistration,
        ],
    ),
    (
        CanonicalField::CatastralReference,
        &[
            DocumentType::Contract,
            DocumentType::Declaration,
            DocumentType::InstallerCertificate,
            DocumentType::CeeFinal,
            DocumentType::CeeRegistration,
        ],
    ),
    (CanonicalField::UtmCoordinates, &[DocumentType::Contract]),
    (CanonicalField::LifespanYears, &[DocumentType::InstallerCertificate]),
    (
        CanonicalField::SurfaceArea,
        &[
            DocumentType::InstallerCertificate,
            DocumentType::CalculationSheet,
        ],
    ),
    (
        CanonicalField::ClimateZone,
        &[
            DocumentType::InstallerCertificate,
            DocumentType::CalculationSheet,
        ],
    ),
    (CanonicalField::SellPricePerKwh, &[DocumentType::Contract]),
    (CanonicalField::InvoiceNumber, &[DocumentType::Invoice]),
    (CanonicalField::InvoiceDate, &[DocumentType::Invoice]),
    (CanonicalField::Amount, &[DocumentType::Invoice]),
    (
        CanonicalField::RegistrationNumber,
        &[DocumentType::CeeRegistration],
    ),
    (
        CanonicalField::CertificateDate,
        &[DocumentType::CeeFinal, DocumentType::CeeRegistration],
    ),
];

/// Whether `field` may carry a value for documents of type `doc`.
pub fn applies_to(field: CanonicalField, doc: DocumentType) -> bool {
    APPLICABILITY
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, docs)| docs.contains(&doc))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applicability_covers_every_field() {
        for section in CATALOG {
            for field in section.fields {
                assert!(
                    APPLICABILITY.iter().any(|(f, _)| f == field),
                    "field {field:?} missing from applicability table"
                );
            }
        }
    }

    #[test]
    fn test_catalog_has_22_rows() {
        let total: usize = CATALOG.iter().map(|s| s.fields.len()).sum();
        assert_eq!(total, 22);
    }

    #[test]
    fn test_applies_to() {
        assert!(applies_to(CanonicalField::InvoiceNumber, DocumentType::Invoice));
        assert!(!applies_to(CanonicalField::InvoiceNumber, DocumentType::Contract));
        assert!(!applies_to(CanonicalField::OwnerName, DocumentType::PhotographicReport));
        assert!(!applies_to(CanonicalField::OwnerName, DocumentType::Unknown));
    }
}
