//! Process command - build the correspondence matrix for one case folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use resmat_core::models::config::ResmatConfig;
use resmat_core::{
    classify, normalize, CaseAggregator, DocumentExtractor, DocumentType, MatrixGrid, MatrixRow,
    PdfProcessor, PdfTextExtractor, PdfType,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Case folder containing the dossier PDFs
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV matrix
    Csv,
    /// JSON matrix
    Json,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        ResmatConfig::from_file(Path::new(path))?
    } else {
        ResmatConfig::default()
    };

    if !args.input.is_dir() {
        anyhow::bail!("Case folder not found: {}", args.input.display());
    }

    info!("Processing case folder: {}", args.input.display());

    let grid = process_case(&args.input, &config)?;
    let output = render(&grid, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Matrix written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

/// Decode, classify, extract and aggregate every document in a case folder.
///
/// Documents are visited in filename order so aggregation is reproducible.
/// A document that fails to decode is logged and skipped; it must not take
/// the rest of the case down with it.
pub fn process_case(folder: &Path, config: &ResmatConfig) -> anyhow::Result<MatrixGrid> {
    let pattern = folder.join("*.*");
    let mut files: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "xlsx")
        })
        .collect();
    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let extractor = DocumentExtractor::new().with_dni_validation(config.extraction.validate_dni);
    let mut aggregator = CaseAggregator::new();

    for path in &files {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        pb.set_message(filename.to_string());

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext.eq_ignore_ascii_case("xlsx") {
            // Spreadsheets belong to the external calculation parser.
            info!("skipping spreadsheet {filename}, counted as CALCULO");
            pb.inc(1);
            continue;
        }

        match process_document(path, filename, config, &extractor) {
            Ok((doc_type, fields)) => {
                debug!(%doc_type, fields = fields.len(), "document processed");
                aggregator.merge(doc_type, &fields);
            }
            Err(e) => {
                warn!("failed to process {}: {e}", path.display());
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(MatrixGrid::assemble(&aggregator.finish()))
}

fn process_document(
    path: &Path,
    filename: &str,
    config: &ResmatConfig,
    extractor: &DocumentExtractor,
) -> anyhow::Result<(DocumentType, resmat_core::FieldMap)> {
    let data = fs::read(path)?;
    let mut pdf = PdfTextExtractor::new();
    pdf.load(&data)?;

    let pdf_type = pdf.analyze()?;
    let raw_text = if uses_embedded_text(pdf_type, config) {
        pdf.extract_text()?
    } else {
        // Image-only scans and a disabled text layer both degrade to empty
        // text; classification can still succeed from the filename alone.
        debug!("{filename}: text layer not used ({pdf_type:?})");
        String::new()
    };

    let text = normalize(&raw_text);
    let doc_type = classify(filename, &text);
    let fields = extractor.extract(doc_type, &text);
    Ok((doc_type, fields))
}

/// Whether to read the embedded text layer. Image-only and empty PDFs have
/// nothing to read, and `prefer_embedded_text = false` turns the layer off
/// even when one exists.
fn uses_embedded_text(pdf_type: PdfType, config: &ResmatConfig) -> bool {
    config.pdf.prefer_embedded_text && matches!(pdf_type, PdfType::Text | PdfType::Hybrid)
}

/// Render the matrix in the requested format.
pub fn render(grid: &MatrixGrid, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(grid)?),
        OutputFormat::Csv => render_csv(grid),
    }
}

fn render_csv(grid: &MatrixGrid) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Header: blank corner, the row-label column, then one column per type.
    let mut header = vec!["", "Info"];
    header.extend(grid.columns.iter().copied());
    wtr.write_record(&header)?;

    let width = header.len();
    for row in &grid.rows {
        match row {
            MatrixRow::Section { header } => {
                let mut record = vec![header.to_string()];
                record.resize(width, String::new());
                wtr.write_record(&record)?;
            }
            MatrixRow::Field { label, cells, .. } => {
                let mut record = vec![String::new(), label.to_string()];
                record.extend(cells.iter().map(|c| c.clone().unwrap_or_default()));
                wtr.write_record(&record)?;
            }
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resmat_core::aggregate::CaseAggregator;

    #[test]
    fn test_embedded_text_honors_config() {
        let mut config = ResmatConfig::default();
        assert!(uses_embedded_text(PdfType::Text, &config));
        assert!(uses_embedded_text(PdfType::Hybrid, &config));
        assert!(!uses_embedded_text(PdfType::Image, &config));
        assert!(!uses_embedded_text(PdfType::Empty, &config));

        config.pdf.prefer_embedded_text = false;
        assert!(!uses_embedded_text(PdfType::Text, &config));
        assert!(!uses_embedded_text(PdfType::Hybrid, &config));
    }

    #[test]
    fn test_csv_layout() {
        let grid = MatrixGrid::assemble(&CaseAggregator::new().finish());
        let csv = render_csv(&grid).unwrap();
        let mut lines = csv.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with(",Info,"));
        assert!(header.contains("E1-3-3 FACTURA"));

        let first_section = lines.next().unwrap();
        assert!(first_section.starts_with("HOME OWNER,"));

        // Header + 3 sections + 22 field rows.
        assert_eq!(csv.lines().count(), 26);
    }
}
