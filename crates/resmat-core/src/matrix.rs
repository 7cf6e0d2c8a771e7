//! Correspondence matrix assembly.
//!
//! The matrix is the deliverable: canonical fields as rows grouped into
//! sections, the eleven document types as columns. A cell holds the
//! extracted value when the (field, type) pair is applicable and a value
//! was found; applicable-but-missing cells stay empty, as do structurally
//! inapplicable ones. Assembly is pure and deterministic.

use serde::Serialize;

use crate::aggregate::CaseRecord;
use crate::models::catalog::{self, CanonicalField, CATALOG};
use crate::models::document::DocumentType;

/// One row of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixRow {
    /// Section header (HOME OWNER, ACT, DOCUMENT).
    Section { header: &'static str },
    /// A field row with one cell per document type column.
    Field {
        label: &'static str,
        field: CanonicalField,
        cells: Vec<Option<String>>,
    },
}

/// The assembled matrix for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixGrid {
    /// Column headers in document type order.
    pub columns: Vec<&'static str>,
    pub rows: Vec<MatrixRow>,
}

impl MatrixGrid {
    /// Build the matrix for a case record.
    pub fn assemble(record: &CaseRecord) -> Self {
        let columns = DocumentType::CATALOG
            .iter()
            .map(|d| d.column_label())
            .collect();

        let mut rows = Vec::new();
        for section in CATALOG {
            rows.push(MatrixRow::Section {
                header: section.header,
            });
            for &field in section.fields {
                let cells = DocumentType::CATALOG
                    .iter()
                    .map(|&doc_type| {
                        if catalog::applies_to(field, doc_type) {
                            record.get(field, doc_type).map(str::to_string)
                        } else {
                            None
                        }
                    })
                    .collect();
                rows.push(MatrixRow::Field {
                    label: field.label(),
                    field,
                    cells,
                });
            }
        }
        Self { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CaseAggregator;
    use crate::models::document::FieldMap;

    fn sample_record() -> CaseRecord {
        let mut contract = FieldMap::new();
        contract.insert(CanonicalField::OwnerName, "JUAN GARCIA LOPEZ");
        contract.insert(CanonicalField::NationalId, "12345678Z");
        let mut invoice = FieldMap::new();
        invoice.insert(CanonicalField::InvoiceNumber, "2024-0451");

        let mut agg = CaseAggregator::new();
        agg.merge(DocumentType::Contract, &contract);
        agg.merge(DocumentType::Invoice, &invoice);
        agg.finish()
    }

    fn field_row<'a>(grid: &'a MatrixGrid, wanted: CanonicalField) -> &'a [Option<String>] {
        grid.rows
            .iter()
            .find_map(|row| match row {
                MatrixRow::Field { field, cells, .. } if *field == wanted => Some(cells.as_slice()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_shape() {
        let grid = MatrixGrid::assemble(&sample_record());
        assert_eq!(grid.columns.len(), 11);
        // 3 section headers + 22 field rows.
        assert_eq!(grid.rows.len(), 25);
        for row in &grid.rows {
            if let MatrixRow::Field { cells, .. } = row {
                assert_eq!(cells.len(), 11);
            }
        }
    }

    #[test]
    fn test_values_land_in_their_columns() {
        let grid = MatrixGrid::assemble(&sample_record());
        let name = field_row(&grid, CanonicalField::OwnerName);
        assert_eq!(name[0].as_deref(), Some("JUAN GARCIA LOPEZ")); // contract column
        assert_eq!(name[3], None); // invoice column: applicable but absent

        let number = field_row(&grid, CanonicalField::InvoiceNumber);
        assert_eq!(number[3].as_deref(), Some("2024-0451"));
        assert_eq!(number[0], None); // not applicable to contracts
    }

    #[test]
    fn test_unknown_column_always_blank() {
        let grid = MatrixGrid::assemble(&sample_record());
        for row in &grid.rows {
            if let MatrixRow::Field { cells, .. } = row {
                assert_eq!(cells[10], None);
            }
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let record = sample_record();
        let a = serde_json::to_string(&MatrixGrid::assemble(&record)).unwrap();
        let b = serde_json::to_string(&MatrixGrid::assemble(&record)).unwrap();
        assert_eq!(a, b);
    }
}
