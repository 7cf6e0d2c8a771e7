//! Rule set for the final energy efficiency certificate (CEE).

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{catastral, dates, present, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::with_transform(
            CanonicalField::ActAddress,
            &[
                r"(?i)direcci[oó]n[:\s]+([^\n]{8,110})",
                r"(?i)\b(?:C/|CL\.?|CALLE|AVENIDA|AVDA\.?|PLAZA)\s+([^\n]{6,100})",
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
        FieldRule::with_transform(
            CanonicalField::CertificateDate,
            &[
                r"(?i)fecha(?:\s+de\s+(?:emisi[oó]n|certificaci[oó]n))?[:\s]+(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})",
            ],
            dates::dmy_date,
        ),
        FieldRule::with_transform(
            CanonicalField::CertificateDate,
            &[r"(?i)firmado[^\d\n]{0,40}(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})"],
            dates::long_date,
        ),
        FieldRule::with_transform(
            CanonicalField::SignaturePresent,
            &[r"(?i)\b(firmado|firma del t[eé]cnico|certificador)\b"],
            present,
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "CERTIFICADO DE EFICIENCIA ENERGETICA DE EDIFICIOS\n\
        Direccion: Avenida del Sol 3, León\n\
        Referencia catastral: 9872023VH5797S0001WX\n\
        Calificacion energetica: E\n\
        Fecha de emision: 15/07/2024\n\
        Firmado por el tecnico certificador.\n";

    #[test]
    fn test_cee_fields() {
        let map = RULES.apply(SAMPLE);
        assert_eq!(
            map.get(CanonicalField::ActAddress),
            Some("Avenida del Sol 3, León")
        );
        assert_eq!(
            map.get(CanonicalField::CatastralReference),
            Some("9872023VH5797S0001WX")
        );
        assert_eq!(map.get(CanonicalField::CertificateDate), Some("15/07/2024"));
        assert_eq!(map.get(CanonicalField::SignaturePresent), Some("Present"));
    }

    #[test]
    fn test_bare_street_line_address() {
        let map = RULES.apply("situacion\nCALLE La Rua 21, 3º Izda, León\nmas texto");
        assert_eq!(
            map.get(CanonicalField::ActAddress),
            Some("La Rua 21, 3º Izda, León")
        );
    }
}
