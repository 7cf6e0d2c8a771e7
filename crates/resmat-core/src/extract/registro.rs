//! Rule set for the CEE registration (registro).

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{catastral, dates, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::new(
            CanonicalField::RegistrationNumber,
            &[
                r"(?i:n[ºo°.úu]*m?\.?\s*(?:de\s+)?registro)[:\s]+([0-9A-Z][0-9A-Z\-/\.]*)",
                r"(?i:registro)\s*(?i:n[ºo°.úu]*m?\.?)[:\s]*([0-9A-Z][0-9A-Z\-/\.]*)",
            ],
        ),
        FieldRule::with_transform(
            CanonicalField::CertificateDate,
            &[
                r"(?i)fecha(?:\s+de)?(?:\s+(?:registro|inscripci[oó]n|presentaci[oó]n))?[:\s]+(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})",
            ],
            dates::dmy_date,
        ),
        FieldRule::with_transform(
            CanonicalField::ActAddress,
            &[
                r"(?i)direcci[oó]n[:\s]+([^\n]{8,110})",
                r"(?i)emplazamiento[:\s]+([^\n]{8,110})",
            ],
            text::address,
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
