//! Rule set for the declaración responsable.
//!
//! Declarations usually open with the declarant's name and DNI on one
//! line, then restate the dwelling address and catastral reference.

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{catastral, dni, present, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::with_transform(
            CanonicalField::OwnerName,
            &[
                // Name and DNI share the opening line: "JUAN GARCIA LOPEZ 12345678Z".
                r"\n([A-ZÑÁÉÍÓÚ][A-ZÑÁÉÍÓÚ ]{10,80})\s+[0-9OIlL]{7,9}\s*[A-Z6]\b",
                r"(?i:\bd(?:on|o[ñn]a)?\.?\s+)([A-ZÁÉÍÓÚÑ][A-Za-zÁÉÍÓÚÑáéíóúñ ]{5,60}?),?\s+con (?i:D\.?N\.?I\.?|N\.?I\.?F\.?)",
            ],
            text::person_name,
        ),
        FieldRule::with_transform(
            CanonicalField::NationalId,
            &[
                r"(?i:\bd\.?n\.?i\.?|\bn\.?i\.?[fe]\.?)[^0-9A-Za-z\n]{0,10}([0-9OIlL]{7,9}\s*\-?\s*[A-Z6])",
                r"\b([0-9OIlL]{8}\s*\-?\s*[A-Z6])\b",
            ],
            dni::repair_capture,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerAddress,
            &[
                r"(?i)con domicilio en ([^\n]{8,110})",
                r"(?i)\bdomicilio[:\s]+([^\n]{8,110})",
            ],
            text::address,
        ),
        FieldRule::with_transform(
            CanonicalField::SignaturePresent,
            &[r"(?i)\b(firmado|firma(?:nte)?|y para que conste)\b"],
            present,
        ),
        FieldRule::with_transform(
            CanonicalField::ProjectCode,
            &[r"(?i)\b(RES0+[12]0)\b"],
            text::act_code,
        ),
        FieldRule::with_transform(
            CanonicalField::CatastralReference,
            &[
                crate::rules::patterns::CATASTRAL_LABELED,
                crate::rules::patterns::CATASTRAL_TOKEN,
            ],
            catastral::canonicalize,
        ),
    ]);
}
