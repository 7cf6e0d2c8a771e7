//! Catastral reference canonicalization.

use regex::Captures;

use super::patterns::{CATASTRAL_SHAPE, STREET_PREFIX};

/// Transform: canonicalize a catastral reference candidate.
///
/// Strips embedded whitespace and uppercases, then rejects anything that
/// is a compacted street address rather than a reference, falls outside
/// the 10-25 character range, or breaks the alternating digit/letter
/// block shape.
pub fn canonicalize(caps: &Captures) -> Option<String> {
    let raw = caps.get(1)?.as_str();
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if STREET_PREFIX.is_match(&compact) {
        return None;
    }
    if compact.len() < 10 || compact.len() > 25 {
        return None;
    }
    if !CATASTRAL_SHAPE.is_match(&compact) {
        return None;
    }
    Some(compact)
}
