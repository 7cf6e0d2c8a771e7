//! Transforms for names, addresses and other free-text fields.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::collapse_ws;

lazy_static! {
    /// Words that mark a "name" capture as contract boilerplate, not a person.
    static ref NAME_BAD_WORDS: Regex = Regex::new(
        r"(?i)\b(haya|debido|cantidad|instalador|por\s+cuanto|notificaciones|cl[aá]usula|presente)\b"
    )
    .unwrap();

    /// Street-type tokens that signal a truncated or garbage address capture.
    static ref ADDRESS_GARBAGE: Regex = Regex::new(r"^(C|CL|CALLE|AV|AVD|S/N)$").unwrap();

    static ref RES_CODE_ZEROS: Regex = Regex::new(r"RES0+(\d)").unwrap();
}

/// Transform: a person's name.
///
/// Accepts two to eight words and rejects captures that swallowed contract
/// boilerplate.
pub fn person_name(caps: &Captures) -> Option<String> {
    let name = collapse_ws(caps)?;
    let words = name.split(' ').count();
    if !(2..=8).contains(&words) {
        return None;
    }
    if NAME_BAD_WORDS.is_match(&name) {
        return None;
    }
    Some(name)
}

/// Transform: a postal address.
///
/// Collapses whitespace, drops trailing punctuation, and rejects captures
/// that are nothing but a street-type token.
pub fn address(caps: &Captures) -> Option<String> {
    let addr = collapse_ws(caps)?;
    let addr = addr.trim_end_matches(['.', ',']).trim().to_string();
    if addr.len() < 8 {
        return None;
    }
    if ADDRESS_GARBAGE.is_match(addr.to_uppercase().as_str()) {
        return None;
    }
    Some(addr)
}

/// Transform: a phone number, digits (and leading +) only, at least nine digits.
pub fn phone(caps: &Captures) -> Option<String> {
    let raw = caps.get(1)?.as_str();
    let kept: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    let digit_count = kept.chars().filter(|c| c.is_ascii_digit()).count();
    if digit_count >= 9 {
        Some(kept)
    } else {
        None
    }
}

/// Transform: a RES project code, uppercased with padded zeros squeezed.
///
/// OCR sometimes stretches RES020 into RES0020; the squeeze restores the
/// three-digit form.
pub fn act_code(caps: &Captures) -> Option<String> {
    let code = collapse_ws(caps)?.to_uppercase();
    let code = RES_CODE_ZEROS.replace(&code, "RES0$1");
    Some(code.into_owned())
}

/// Transform: labeled UTM coordinates with groups (1) zone, (2) x, (3) y.
pub fn utm_labeled(caps: &Captures) -> Option<String> {
    let zone = caps.get(1)?.as_str().trim();
    let x = caps.get(2)?.as_str().trim();
    let y: String = caps.get(3)?.as_str().chars().filter(|c| !c.is_whitespace()).collect();
    Some(format!("X:{x} Y:{y} HUSO:{zone}"))
}

/// Transform: bare X/Y coordinates with groups (1) x, (2) y, (3) optional zone.
///
/// The zone defaults to 30, the huso covering most of peninsular Spain.
pub fn utm_xy(caps: &Captures) -> Option<String> {
    let x = caps.get(1)?.as_str().trim();
    let y = caps.get(2)?.as_str().trim();
    let zone = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("30");
    Some(format!("X:{x} Y:{y} HUSO:{zone}"))
}
