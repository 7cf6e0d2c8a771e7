//! End-to-end pipeline tests: normalize, classify, extract, aggregate,
//! assemble. These run on decoded text, no PDFs involved.

use pretty_assertions::assert_eq;
use resmat_core::{
    classify, extract_document, normalize, CanonicalField, CaseAggregator, DocumentType, FieldMap,
    MatrixGrid, MatrixRow, RawDocument,
};

fn cell(grid: &MatrixGrid, wanted: CanonicalField, col: usize) -> Option<String> {
    grid.rows.iter().find_map(|row| match row {
        MatrixRow::Field { field, cells, .. } if *field == wanted => Some(cells[col].clone()),
        _ => None,
    })?
}

#[test]
fn invoice_text_lands_in_invoice_column() {
    let raw = "FACTURA Nº 2024-0451\nFecha: 03/07/2024\nCliente: Juan Garcia Lopez\nTOTAL: 1.500,40\n";

    let doc_type = classify("FACTURA_451.pdf", raw);
    assert_eq!(doc_type, DocumentType::Invoice);

    let doc = RawDocument::new("caso1/FACTURA_451.pdf", doc_type, raw);
    let fields = extract_document(&doc);
    assert_eq!(fields.get(CanonicalField::InvoiceNumber), Some("2024-0451"));

    let mut agg = CaseAggregator::new();
    agg.merge(doc_type, &fields);
    let grid = MatrixGrid::assemble(&agg.finish());

    // Invoice is the fourth column.
    assert_eq!(
        cell(&grid, CanonicalField::InvoiceNumber, 3).as_deref(),
        Some("2024-0451")
    );
    assert_eq!(
        cell(&grid, CanonicalField::InvoiceDate, 3).as_deref(),
        Some("03/07/2024")
    );
    assert_eq!(
        cell(&grid, CanonicalField::Amount, 3).as_deref(),
        Some("1.500,40")
    );
    // The same fields stay out of every other column.
    assert_eq!(cell(&grid, CanonicalField::InvoiceNumber, 0), None);
}

#[test]
fn invoice_round_trip_with_plain_labels() {
    let raw = "FACTURA Nº 2024-0451\nD.N.I. 12345678Z\nIMPORTE: 340,50 €\n";
    let doc = RawDocument::new("caso1/FACTURA.pdf", DocumentType::Invoice, raw);
    let fields = extract_document(&doc);

    assert_eq!(fields.get(CanonicalField::InvoiceNumber), Some("2024-0451"));
    assert_eq!(fields.get(CanonicalField::NationalId), Some("12345678Z"));
    assert_eq!(fields.get(CanonicalField::Amount), Some("340,50"));
    assert_eq!(fields.len(), 3);
}

#[test]
fn mangled_accents_are_repaired_before_extraction() {
    let raw = "CONTRATO\nUBICACI6N DE LA ACTUACI6N: Calle Ancha 7, Le6n\n";
    assert!(normalize(raw).contains("UBICACIÓN DE LA ACTUACIÓN: Calle Ancha 7, León"));

    let doc = RawDocument::new("caso1/CONTRATO.pdf", DocumentType::Contract, raw);
    let fields = extract_document(&doc);
    assert_eq!(
        fields.get(CanonicalField::ActAddress),
        Some("Calle Ancha 7, León")
    );
}

#[test]
fn empty_text_produces_an_all_blank_matrix() {
    let doc = RawDocument::new("caso1/DECLARACION.pdf", DocumentType::Declaration, "");
    let fields = extract_document(&doc);
    assert!(fields.is_empty());

    let mut agg = CaseAggregator::new();
    agg.merge(doc.document_type, &fields);
    let grid = MatrixGrid::assemble(&agg.finish());
    for row in &grid.rows {
        if let MatrixRow::Field { cells, .. } = row {
            assert!(cells.iter().all(Option::is_none));
        }
    }
}

#[test]
fn photographic_report_contributes_nothing() {
    // Even if a photo report somehow carried parseable text, it stays out.
    let doc = RawDocument::new(
        "caso1/INFORME_FOTOGRAFICO.pdf",
        DocumentType::PhotographicReport,
        "Cliente: Juan Garcia Lopez D.N.I. 12345678Z",
    );
    let fields = extract_document(&doc);
    assert!(fields.is_empty());
}

#[test]
fn first_declaration_wins_per_slot() {
    let first = RawDocument::new(
        "caso1/DECLARACION_1.pdf",
        DocumentType::Declaration,
        "DECLARACION RESPONSABLE\nMARIA ELENA LOPEZ RUIZ 71109449G\n",
    );
    let second = RawDocument::new(
        "caso1/DECLARACION_2.pdf",
        DocumentType::Declaration,
        "DECLARACION RESPONSABLE\nJUAN GARCIA LOPEZ 12345678Z\ncon domicilio en Calle Mayor 12, León\n",
    );

    let mut agg = CaseAggregator::new();
    agg.merge(first.document_type, &extract_document(&first));
    agg.merge(second.document_type, &extract_document(&second));
    let record = agg.finish();

    assert_eq!(
        record.get(CanonicalField::OwnerName, DocumentType::Declaration),
        Some("MARIA ELENA LOPEZ RUIZ")
    );
    assert_eq!(
        record.get(CanonicalField::NationalId, DocumentType::Declaration),
        Some("71109449G")
    );
    // Slots the first declaration left empty still fill from the second.
    assert_eq!(
        record.get(CanonicalField::OwnerAddress, DocumentType::Declaration),
        Some("Calle Mayor 12, León")
    );
}

#[test]
fn unknown_documents_are_skipped_not_failed() {
    let doc_type = classify("escaneo_suelto.pdf", "contenido sin marcadores conocidos");
    assert_eq!(doc_type, DocumentType::Unknown);

    let mut agg = CaseAggregator::new();
    agg.merge(doc_type, &FieldMap::new());
    assert!(agg.finish().is_empty());
}
