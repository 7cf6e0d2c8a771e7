//! Rule engine for field extraction.
//!
//! Every document type is described by a [`RuleSet`]: an ordered list of
//! [`FieldRule`]s, each pairing a canonical field with candidate patterns
//! and a transform. One shared interpreter walks the rules, so adding
//! support for a new document layout means adding data, not code.

pub mod amounts;
pub mod catastral;
pub mod dates;
pub mod dni;
pub mod patterns;
pub mod text;

use regex::{Captures, Regex};
use tracing::trace;

use crate::models::catalog::CanonicalField;
use crate::models::document::FieldMap;

/// Turns a regex match into a field value, or rejects the candidate.
///
/// Returning `None` moves the scan on to the next match or pattern, which
/// is how checksum-gated fields (DNI) skip corrupt candidates.
pub type Transform = fn(&Captures) -> Option<String>;

/// One extraction rule: the field it fills, the patterns that find
/// candidates (in priority order), and the transform that validates them.
pub struct FieldRule {
    pub field: CanonicalField,
    pub patterns: Vec<Regex>,
    pub transform: Transform,
}

impl FieldRule {
    /// Rule with the default transform: group 1, whitespace collapsed.
    pub fn new(field: CanonicalField, patterns: &[&str]) -> Self {
        Self::with_transform(field, patterns, collapse_ws)
    }

    pub fn with_transform(field: CanonicalField, patterns: &[&str], transform: Transform) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();
        Self {
            field,
            patterns,
            transform,
        }
    }
}

/// An ordered set of rules for one document type.
pub struct RuleSet {
    pub rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Run every rule against `text` and collect the accepted values.
    ///
    /// Patterns within a rule are tried in order; within a pattern, every
    /// match is offered to the transform until one is accepted. The first
    /// accepted value wins and the rule stops. Fields with no accepted
    /// candidate stay absent.
    pub fn apply(&self, text: &str) -> FieldMap {
        let mut map = FieldMap::new();
        if text.trim().is_empty() {
            return map;
        }

        for rule in &self.rules {
            // Several rules may target the same field with different
            // transforms; the earliest rule keeps priority.
            if map.get(rule.field).is_some() {
                continue;
            }
            'patterns: for pattern in &rule.patterns {
                for caps in pattern.captures_iter(text) {
                    if let Some(value) = (rule.transform)(&caps) {
                        if !value.is_empty() {
                            trace!(field = ?rule.field, %value, "rule matched");
                            map.insert(rule.field, value);
                            break 'patterns;
                        }
                    }
                }
            }
        }
        map
    }
}

/// Default transform: capture group 1 with inner whitespace collapsed.
pub fn collapse_ws(caps: &Captures) -> Option<String> {
    let raw = caps.get(1)?.as_str();
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Presence marker: any match records "Present".
pub fn present(_caps: &Captures) -> Option<String> {
    Some("Present".to_string())
}

/// Capture group 1, collapsed and uppercased.
pub fn upper(caps: &Captures) -> Option<String> {
    collapse_ws(caps).map(|v| v.to_uppercase())
}
