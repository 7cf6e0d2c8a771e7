//! Transforms for monetary amounts and energy figures.
//!
//! Amounts stay textual in the original locale form (comma decimals);
//! the matrix reproduces what the document says, it does not do arithmetic.

use regex::Captures;

use super::collapse_ws;

/// Transform: a monetary amount kept as written, minus a dangling separator.
pub fn amount(caps: &Captures) -> Option<String> {
    let value = collapse_ws(caps)?;
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(value.trim_end_matches(['.', ',']).to_string())
}

/// Transform: annual energy savings in kWh.
///
/// Figures under 500 kWh are table row numbers or per-unit values the
/// pattern picked up by accident, never a real yearly saving, so they
/// are rejected and the scan continues.
pub fn savings_kwh(caps: &Captures) -> Option<String> {
    let raw = caps.get(1)?.as_str().trim();
    let numeric = raw.replace('.', "").replace(',', ".");
    let value: f64 = numeric.parse().ok()?;
    if value < 500.0 {
        return None;
    }
    Some(raw.to_string())
}

/// Transform: a decimal figure normalized to comma notation.
pub fn decimal_comma(caps: &Captures) -> Option<String> {
    let value = collapse_ws(caps)?;
    Some(value.replace('.', ","))
}
