//! Spanish DNI handling: checksum validation and OCR repair.
//!
//! A DNI is eight digits plus a check letter computed as the number mod 23
//! indexed into a fixed alphabet. The checksum makes aggressive OCR repair
//! safe: a repaired candidate is only accepted if its letter verifies, so
//! a wrong substitution cannot produce a plausible but incorrect DNI.

use regex::Captures;

/// Check letters indexed by (number mod 23).
const CHECK_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Whether `dni` is a well-formed, checksum-valid DNI (8 digits + letter).
pub fn validate_dni(dni: &str) -> bool {
    // Length is checked in bytes, so non-ASCII input must bail before the
    // slice below lands inside a multibyte character.
    if dni.len() != 9 || !dni.is_ascii() {
        return false;
    }
    let (digits, letter) = dni.split_at(8);
    let Ok(number) = digits.parse::<u32>() else {
        return false;
    };
    letter.as_bytes()[0] == CHECK_LETTERS[(number % 23) as usize]
}

/// Attempt to repair an OCR-damaged DNI candidate.
///
/// Uppercases and strips separators, maps O/I/L confusions inside the
/// digit block, then tries the possible readings of the final character.
/// Only a checksum-valid result is returned.
pub fn repair_candidate(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | ':'))
        .collect();
    if cleaned.len() != 9 || !cleaned.is_ascii() {
        return None;
    }

    let (head, tail) = cleaned.split_at(8);
    let digits: String = head
        .chars()
        .map(|c| match c {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        })
        .collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let last = tail.chars().next()?;
    let letter_readings: &[char] = match last {
        // A trailing G often decays to 6; 1 is ambiguous between I and L.
        '6' => &['G'],
        '1' | 'I' | 'L' => &['I', 'L'],
        other if other.is_ascii_uppercase() => return checked(&digits, other),
        _ => return None,
    };
    for letter in letter_readings {
        if let Some(dni) = checked(&digits, *letter) {
            return Some(dni);
        }
    }
    None
}

fn checked(digits: &str, letter: char) -> Option<String> {
    let candidate = format!("{digits}{letter}");
    if validate_dni(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

/// Transform: repair group 1 and accept only checksum-valid results.
pub fn repair_capture(caps: &Captures) -> Option<String> {
    repair_candidate(caps.get(1)?.as_str())
}

/// Transform: accept group 1 as-is when it verifies, no repair.
pub fn checked_capture(caps: &Captures) -> Option<String> {
    let candidate = caps.get(1)?.as_str();
    if validate_dni(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Transform: owner name from an MRZ line of a DNI scan.
///
/// The machine-readable zone writes the name as SURNAME<SURNAME<<GIVEN with
/// `<` as filler. Requires a double chevron and a plausible length.
pub fn mrz_name_capture(caps: &Captures) -> Option<String> {
    let line = caps.get(1)?.as_str();
    if !line.contains("<<") {
        return None;
    }
    let name = line
        .chars()
        .map(|c| if c == '<' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if name.len() >= 6 && name.chars().all(|c| c.is_ascii_uppercase() || c == ' ') {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate_dni("12345678Z"));
        assert!(validate_dni("71109449G"));
        assert!(!validate_dni("12345678A"));
        assert!(!validate_dni("1234567Z"));
        assert!(!validate_dni("ABCDEFGHZ"));
    }

    #[test]
    fn test_multibyte_candidates_rejected() {
        // Nine bytes but only eight characters; must not panic mid-char.
        assert!(!validate_dni("1234567Ñ"));
        assert_eq!(repair_candidate("1234567ñ"), None);
        assert_eq!(repair_candidate("12345678ñ"), None);
    }

    #[test]
    fn test_repair_trailing_six() {
        // 71109449 % 23 == 4 -> G, so the trailing 6 reads as G.
        assert_eq!(repair_candidate("711094496"), Some("71109449G".to_string()));
    }

    #[test]
    fn test_repair_digit_confusions() {
        assert_eq!(repair_candidate("1234S678Z"), None);
        assert_eq!(repair_candidate("I2345678Z"), Some("12345678Z".to_string()));
        assert_eq!(repair_candidate("12345678 Z"), Some("12345678Z".to_string()));
    }

    #[test]
    fn test_repair_separators_stripped() {
        assert_eq!(repair_candidate("12345678-Z"), Some("12345678Z".to_string()));
        assert_eq!(repair_candidate("12.345.678:Z"), Some("12345678Z".to_string()));
    }

    #[test]
    fn test_repair_rejects_invalid_checksum() {
        assert_eq!(repair_candidate("123456786"), None); // would need G, 14 -> Z
        assert_eq!(repair_candidate("12345678B"), None);
    }

    #[test]
    fn test_mrz_name() {
        let re = regex::Regex::new(r"([A-Z0-9<]{20,})").unwrap();
        let caps = re
            .captures("IDESP AAA123456 GARCIA<LOPEZ<<MARIA<ELENA<<<<<")
            .unwrap();
        assert_eq!(
            mrz_name_capture(&caps),
            Some("GARCIA LOPEZ MARIA ELENA".to_string())
        );
    }
}
