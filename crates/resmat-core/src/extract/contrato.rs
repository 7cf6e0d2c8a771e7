//! Rule set for the savings assignment contract (contrato de cesión).
//!
//! The contract is the richest document in a dossier: it names the owner,
//! carries their DNI, both addresses, contact details, the project code,
//! the promised energy savings and the sell price per kWh.

use lazy_static::lazy_static;

use crate::models::catalog::CanonicalField;
use crate::rules::{amounts, catastral, dni, present, text, FieldRule, RuleSet};

lazy_static! {
    pub static ref RULES: RuleSet = RuleSet::new(vec![
        FieldRule::with_transform(
            CanonicalField::OwnerName,
            &[
                // "Y DE OTRA PARTE, D. JUAN GARCIA LOPEZ, mayor de edad"
                r"(?i)Y DE OTRA PARTE,?\s+(?:D\.?\s+|Do[ñn]a\.?\s+|DON\s+|DO[ÑN]A\s+)?([A-ZÁÉÍÓÚÑ][A-Za-zÁÉÍÓÚÑáéíóúñ\s]{5,60}?),?\s+mayor de edad",
                r"(?i)\bCEDENTE[,:\s]+(?:D\.?\s+|DON\s+|DO[ÑN]A\s+)?([A-ZÁÉÍÓÚÑ][A-Za-zÁÉÍÓÚÑáéíóúñ\s]{5,60}?),\s",
            ],
            text::person_name,
        ),
        FieldRule::with_transform(
            CanonicalField::NationalId,
            &[
                // Flags stay scoped to the label so the check letter class
                // cannot swallow lowercase prose after the number.
                r"(?i:\bd\.?n\.?i\.?)[^0-9A-Za-z\n]{0,10}([0-9OIlL]{7,9}\s*\-?\s*[A-Z6])",
                r"(?i:\bn\.?i\.?f\.?)[^0-9A-Za-z\n]{0,10}([0-9OIlL]{7,9}\s*\-?\s*[A-Z6])",
            ],
            dni::repair_capture,
        ),
        FieldRule::with_transform(
            CanonicalField::OwnerAddress,
            &[
                r"(?i)con domicilio (?:a estos efectos )?en ([^\n]{8,110})",
                r"(?i)\bdomicilio[:\s]+([^\n]{8,110})",
            ],
            text::address,
        ),
        FieldRule::with_transform(
            CanonicalField::Phone,
            &[r"(?i)tel[eé]fono[:\s]*([+\d][\d .\-]{7,20})"],
            text::phone,
        ),
        FieldRule::new(
            CanonicalField::Email,
            &[
                r"(?i)(?:correo electr[oó]nico|e-?mail)[:\s]*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})",
                r"\b([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})\b",
            ],
        ),
        FieldRule::with_transform(
            CanonicalField::SignaturePresent,
            &[r"(?i)\b(firmado|firman|firma del cedente|en prueba de conformidad)\b"],
            present,
        ),
        FieldRule::with_transform(
            CanonicalField::ProjectCode,
            &[r"(?i)\b(RES0+[12]0)\b"],
            text::act_code,
        ),
        FieldRule::with_transform(
            CanonicalField::EnergySavings,
            &[
                r"(?i)ahorro[^\n]{0,60}?([\d.,]+)\s*kWh",
                r"(?i)([\d.,]+)\s*kWh/a[ñn]o",
            ],
            amounts::savings_kwh,
        ),
        FieldRule::with_transform(
            CanonicalField::ActAddress,
            &[
                r"(?i)UBICACI[OÓ]N DE LA ACTUACI[OÓ]N[:\s]*([^\n]{8,110})",
                r"(?i)vivienda (?:sita|situada) en ([^\n]{8,110})",
                r"(?i)\blocalidad de ([^\n]{8,90})",
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
            CanonicalField::UtmCoordinates,
            &[r"(?i)huso[:\s]*(\d{2})[^\d\n]{0,12}X[:\s]*([\d.,]+)[^\d\n]{0,12}Y[:\s]*([\d., ]+)"],
            text::utm_labeled,
        ),
        FieldRule::with_transform(
            CanonicalField::UtmCoordinates,
            &[r"(?i)\bX[:\s]*([\d.]{5,12})[\s,;]{1,5}Y[:\s]*([\d.]{6,12})(?:[\s,;]{1,5}huso[:\s]*(\d{2}))?"],
            text::utm_xy,
        ),
        FieldRule::with_transform(
            CanonicalField::SellPricePerKwh,
            &[
                r"(?i)precio[^\n]{0,50}?([\d.,]+)\s*(?:€|euros?)\s*/?\s*kWh",
                r"(?i)([\d.,]+)\s*(?:€|euros?)\s*/\s*kWh",
            ],
            amounts::amount,
        ),
    ]);
}
