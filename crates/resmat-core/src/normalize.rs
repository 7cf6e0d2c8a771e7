//! Repair of mis-decoded Spanish text.
//!
//! Scanner OCR and some PDF text layers mangle accented Spanish characters
//! in recurring ways: `ó` decodes as `6` (UBICACI6N), `í` as `fa` (Garcfa),
//! `ñ` duplicates surrounding vowels (Espa6a, aaos). The repairs here are
//! word-context substitutions, applied only where the surrounding letters
//! make the intent unambiguous. Running the normalizer twice must produce
//! the same output as running it once.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ordered accent repairs. Specific rules run before generic ones.
    static ref ACCENT_RULES: Vec<(Regex, &'static str)> = vec![
        // -CI6N suffixes in all-caps headings.
        (
            Regex::new(
                r"\b(UBICACI|DIRECCI|DECLARACI|ACTUACI|INSTALACI|CERTIFICACI|POBLACI|EDIFICACI)6N\b"
            )
            .unwrap(),
            "${1}ÓN",
        ),
        // Mixed-case -ción suffixes.
        (
            Regex::new(r"\b([A-Za-zÁÉÍÓÚÑáéíóúñ]{3,}[Cc]i)6n\b").unwrap(),
            "${1}ón",
        ),
        (Regex::new(r"\bLE6N\b").unwrap(), "LEÓN"),
        (Regex::new(r"\b([Ll])e6n\b").unwrap(), "${1}eón"),
        // -ía words where 'í' decoded as 'f'.
        (
            Regex::new(r"\b([Ee]nerg|[Gg]arc|[Mm]ar|[Pp]olic)fa\b").unwrap(),
            "${1}ía",
        ),
        (Regex::new(r"\b([Dd])fa\b").unwrap(), "${1}ía"),
        (Regex::new(r"\b([Ee])spa6a\b").unwrap(), "${1}spaña"),
        (Regex::new(r"\b([Aa])aos\b").unwrap(), "${1}ños"),
    ];

    static ref HSPACE: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Normalize decoded document text.
///
/// Straightens typographic quotes, repairs known accent mangling, collapses
/// runs of horizontal whitespace, and squeezes blank-line runs. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2019}' | '\u{b4}' | '`' => out.push('\''),
            '\u{2033}' => out.push_str("''"),
            _ => out.push(ch),
        }
    }

    for (pattern, replacement) in ACCENT_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }

    let out = HSPACE.replace_all(&out, " ");
    let out = BLANK_LINES.replace_all(&out, "\n\n");
    out.trim().to_string()
}
