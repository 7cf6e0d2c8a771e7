//! Rule set for DNI card scans.
//!
//! DNI scans come out of OCR badly. The checksum makes the number
//! recoverable anyway, and the machine-readable zone is often the most
//! reliable source for the holder's name.

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{dni, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::with_transform(
            CanonicalField::NationalId,
            &[
                crate::rules::patterns::DNI_CLEAN,
                r"(?i:idesp)[^0-9A-Za-z\n]{0,10}[A-Z]{3}\d{6}[^0-9A-Za-z\n]{0,10}([0-9OIlL]{8,9}[A-Z6]?)",
                crate::rules::patterns::DNI_OCR,
            ],
            dni::repair_capture,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerName,
            &[r"([A-Z0-9<]{20,})"],
            dni::mrz_name_capture,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerName,
            &[
                r"(?i:apellidos)[:\s]+([A-ZÁÉÍÓÚÑ][A-ZÁÉÍÓÚÑ ]{3,60})\n[\s]*(?i:nombre)[:\s]+",
                r"(?i:nombre)[:\s]+([A-ZÁÉÍÓÚÑ][A-ZÁÉÍÓÚÑ ]{3,60})",
            ],
            text::person_name,
        ),
    ]);
}
