//! Shared pattern fragments and compiled helpers used across rule sets.

use lazy_static::lazy_static;
use regex::Regex;

/// A well-formed catastral reference token: digit/letter blocks, no spaces.
pub const CATASTRAL_TOKEN: &str =
    r"\b(\d{6,8}[A-Z]{1,3}\d{2,6}[A-Z]{1,4}\d{1,6}[A-Z]{1,4})\b";

/// A catastral reference introduced by its label. The capture stays
/// case-sensitive so it cannot swallow the prose after the reference.
pub const CATASTRAL_LABELED: &str =
    r"(?i:referencia catastral)[^\n]{0,20}?([0-9A-Z ]{10,35})";

/// A clean DNI: eight digits plus check letter.
pub const DNI_CLEAN: &str = r"\b(\d{8}[A-Z])\b";

/// A DNI as OCR tends to render it: digits with O/I/l/L confusions and a
/// check letter that may itself have decayed to a 6.
pub const DNI_OCR: &str = r"\b([0-9OIlL]{7,9}\s*\-?\s*[A-Z6]?)\b";

lazy_static! {
    /// Street-type prefixes that disqualify a catastral candidate. These
    /// show up when an address line gets compacted into one token.
    pub static ref STREET_PREFIX: Regex =
        Regex::new(r"^(CL|C|CALLE|AV|AVENIDA|PL|PLAZA)\d").unwrap();

    /// Final shape check for a canonical catastral reference.
    pub static ref CATASTRAL_SHAPE: Regex =
        Regex::new(r"^[0-9]+[A-Z]+[0-9]+[A-Z]+[0-9]+[A-Z]+$").unwrap();
}
