//! Per-case aggregation of extracted fields.
//!
//! A case is one client dossier. Documents are merged in processing order
//! and the first value written for a (field, document type) slot is kept;
//! later documents of the same type never overwrite it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::catalog::CanonicalField;
use crate::models::document::{DocumentType, FieldMap};

/// The merged extraction results for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseRecord {
    values: BTreeMap<(CanonicalField, DocumentType), String>,
}

impl CaseRecord {
    /// Value recorded for a (field, document type) slot, if any.
    pub fn get(&self, field: CanonicalField, doc_type: DocumentType) -> Option<&str> {
        self.values.get(&(field, doc_type)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accumulates field maps from a case's documents.
#[derive(Debug, Default)]
pub struct CaseAggregator {
    record: CaseRecord,
}

impl CaseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's extraction results into the case.
    ///
    /// Non-data-bearing document types are ignored wholesale. For the
    /// rest, each extracted field lands in its (field, type) slot unless
    /// an earlier document of the same type already filled it.
    pub fn merge(&mut self, doc_type: DocumentType, fields: &FieldMap) {
        if !doc_type.is_data_bearing() {
            debug!(%doc_type, "skipping non data-bearing document");
            return;
        }
        for (field, value) in fields.iter() {
            self.record
                .values
                .entry((field, doc_type))
                .or_insert_with(|| value.to_string());
        }
    }

    pub fn finish(self) -> CaseRecord {
        self.record
    }
}
