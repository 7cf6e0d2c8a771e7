//! Core library for processing Spanish residential-energy dossiers.
//!
//! This crate provides:
//! - PDF text decoding (image-only scans degrade to empty text, never fail)
//! - repair of mis-decoded Spanish accents in extracted text
//! - document classification into the eleven known dossier document types
//! - per-type rule-based field extraction (DNI, catastral references, dates,
//!   amounts, UTM coordinates)
//! - per-case aggregation and correspondence-matrix assembly

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extract;
pub mod matrix;
pub mod models;
pub mod normalize;
pub mod pdf;
pub mod rules;

pub use error::{PdfError, ResmatError, Result};
pub use models::catalog::CanonicalField;
pub use models::document::{DocumentType, FieldMap, RawDocument};

pub use aggregate::{CaseAggregator, CaseRecord};
pub use classify::classify;
pub use extract::{extract_document, ruleset_for, DocumentExtractor};
pub use matrix::{MatrixGrid, MatrixRow};
pub use normalize::normalize;
pub use pdf::{PdfProcessor, PdfTextExtractor, PdfType};
