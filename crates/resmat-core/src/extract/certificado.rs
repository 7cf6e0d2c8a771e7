//! Rule set for the installer certificate.
//!
//! The certificate describes the works: programme code, measured savings,
//! execution dates in long Spanish form, and the technical data of the
//! dwelling (surface, climate zone, lifespan of the measure).

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{amounts, catastral, dates, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::with_transform(
            CanonicalField::ProjectCode,
            &[r"(?i)\b(RES0+[12]0)\b"],
            text::act_code,
        ),
        FieldRule::with_transform(
            CanonicalField::EnergySavings,
            &[
                r"(?i)ahorro(?:\s+de)?\s+energ[ií]a[^\n]{0,40}?([\d.,]+)\s*kWh",
                r"(?i)\bAE\b[^\d\n]{0,20}([\d.,]+)\s*kWh",
                r"(?i)([\d.,]+)\s*kWh/a[ñn]o",
            ],
            amounts::savings_kwh,
        ),
        FieldRule::with_transform(
            CanonicalField::StartDate,
            &[r"(?i)(?:inicio|inici(?:aron|ad[ao])|comenzaron)[^\d\n]{0,40}(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})"],
            dates::long_date,
        ),
        FieldRule::with_transform(
            CanonicalField::FinishDate,
            &[r"(?i)(?:finaliza(?:ron|da|do)?|fin de obra|terminaron)[^\d\n]{0,40}(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})"],
            dates::long_date,
        ),
        FieldRule::with_transform(
            CanonicalField::ActAddress,
            &[
                r"(?i)situad[ao] en ([^\n]{8,110})",
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
        FieldRule::new(
            CanonicalField::LifespanYears,
            &[r"(?i)(?:vida [uú]til|duraci[oó]n)[^\d\n]{0,30}(\d{1,3})\s*a[ñn]os"],
        ),
        FieldRule::with_transform(
            CanonicalField::SurfaceArea,
            &[r"(?i)superficie(?:\s+de\s+la)?(?:\s+envolvente)?(?:\s+t[eé]rmica)?[^\d\n]{0,20}([\d.,]+)\s*m2?\b"],
            amounts::decimal_comma,
        ),
        FieldRule::with_transform(
            CanonicalField::ClimateZone,
            &[r"(?i:zona clim[aá]tica)[^A-E\n]{0,10}([A-E]\d)\b"],
            crate::rules::upper,
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "CERTIFICADO DE INSTALADOR\n\
        Actuacion del programa RES020 en la vivienda situada en \
        Avenida del Sol 3, León.\n\
        Los trabajos se iniciaron el 5 de marzo de 2024 y finalizaron \
        el 28 de junio de 2024.\n\
        La referencia catastral es 9872023VH5797S0001WX.\n\
        Ahorro de energia final: 12.690 kWh/año. Vida util de la medida: \
        25 años. Superficie de la envolvente termica: 104.6 m2. \
        Zona climatica: D1.\n";

    #[test]
    fn test_certificate_fields() {
        let map = RULES.apply(SAMPLE);
        assert_eq!(map.get(CanonicalField::ProjectCode), Some("RES020"));
        assert_eq!(map.get(CanonicalField::StartDate), Some("05/03/2024"));
        assert_eq!(map.get(CanonicalField::FinishDate), Some("28/06/2024"));
        assert_eq!(
            map.get(CanonicalField::ActAddress),
            Some("Avenida del Sol 3, León")
        );
        assert_eq!(
            map.get(CanonicalField::CatastralReference),
            Some("9872023VH5797S0001WX")
        );
        assert_eq!(map.get(CanonicalField::EnergySavings), Some("12.690"));
        assert_eq!(map.get(CanonicalField::LifespanYears), Some("25"));
        assert_eq!(map.get(CanonicalField::SurfaceArea), Some("104,6"));
        assert_eq!(map.get(CanonicalField::ClimateZone), Some("D1"));
    }

    #[test]
    fn test_small_kwh_figures_rejected() {
        let map = RULES.apply("tabla: ahorro de energia 42 kWh en fila; total 9.870 kWh/año");
        assert_eq!(map.get(CanonicalField::EnergySavings), Some("9.870"));
    }
}
