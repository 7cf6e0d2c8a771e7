//! Rule set for invoices.

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{amounts, dates, dni, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::new(
            CanonicalField::InvoiceNumber,
            &[
                // "FACTURA Nº 2024-0451", "Factura n.: A-17", "FACTURA NUM 33/24"
                r"(?i:factura)\s*(?i:n[ºo°.úu]*m?\.?\s*)?[:\s]*([0-9A-Z][0-9A-Z\-/\.]*)",
                r"(?i:n[º°]\s*de\s*factura)[:\s]*([0-9A-Z][0-9A-Z\-/\.]*)",
            ],
        ),
        FieldRule::with_transform(
            CanonicalField::InvoiceDate,
            &[
                r"(?i)fecha(?:\s+de\s+(?:emisi[oó]n|factura))?[:\s]+(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})",
                r"(?i)\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})\b",
            ],
            dates::dmy_date,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerName,
            &[r"(?i:cliente)[:\s]+([A-ZÁÉÍÓÚÑ][A-Za-zÁÉÍÓÚÑáéíóúñ. ]{5,60})"],
            text::person_name,
        ),
        FieldRule::with_transform(
            CanonicalField::NationalId,
            &[r"(?i:\bd\.?n\.?i\.?|\bn\.?i\.?f\.?)[^0-9A-Za-z\n]{0,10}([0-9OIlL]{7,9}\s*\-?\s*[A-Z6])"],
            dni::repair_capture,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerAddress,
            &[r"(?i)direcci[oó]n[:\s]+([^\n]{8,110})"],
            text::address,
        ),
        FieldRule::with_transform(
            CanonicalField::Amount,
            &[
                r"(?i)total factura[^\d\n]{0,15}([\d.,]+)",
                r"(?i)\btotal[^\d\n]{0,15}([\d.,]+)",
                r"(?i)\bimporte[^\d\n]{0,15}([\d.,]+)",
            ],
            amounts::amount,
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "FACTURA Nº 2024-0451\n\
        Fecha: 03/07/2024\n\
        Cliente: Juan Garcia Lopez\n\
        D.N.I.: 12345678-Z\n\
        Direccion: Calle Mayor 12, 2B, León\n\
        Instalacion de aerotermia ............ 1.240,00\n\
        IVA 21% ............ 260,40\n\
        TOTAL FACTURA: 1.500,40 EUR\n";

    #[test]
    fn test_invoice_fields() {
        let map = RULES.apply(SAMPLE);
        assert_eq!(map.get(CanonicalField::InvoiceNumber), Some("2024-0451"));
        assert_eq!(map.get(CanonicalField::InvoiceDate), Some("03/07/2024"));
        assert_eq!(map.get(CanonicalField::OwnerName), Some("Juan Garcia Lopez"));
        assert_eq!(map.get(CanonicalField::NationalId), Some("12345678Z"));
        assert_eq!(
            map.get(CanonicalField::OwnerAddress),
            Some("Calle Mayor 12, 2B, León")
        );
        assert_eq!(map.get(CanonicalField::Amount), Some("1.500,40"));
    }

    #[test]
    fn test_invoice_number_variants() {
        for (text, expected) in [
            ("FACTURA Nº 2024-0451", "2024-0451"),
            ("Factura num. A-17", "A-17"),
            ("factura: 33/24", "33/24"),
        ] {
            let map = RULES.apply(text);
            assert_eq!(map.get(CanonicalField::InvoiceNumber), Some(expected), "{text}");
        }
    }

    #[test]
    fn test_invalid_date_stays_absent() {
        let map = RULES.apply("Fecha: 31/02/2024\n");
        assert_eq!(map.get(CanonicalField::InvoiceDate), None);
    }
}
