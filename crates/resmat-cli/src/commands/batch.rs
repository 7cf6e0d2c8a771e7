//! Batch command - build matrices for a directory of case folders.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{error, warn};

use resmat_core::models::config::ResmatConfig;

use super::process::{process_case, render, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory whose subdirectories are case folders
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory (default: alongside each case folder)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each case
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Continue with the remaining cases when one fails
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        ResmatConfig::from_file(std::path::Path::new(path))?
    } else {
        ResmatConfig::default()
    };

    if !args.input.is_dir() {
        anyhow::bail!("Input directory not found: {}", args.input.display());
    }

    let mut cases: Vec<PathBuf> = fs::read_dir(&args.input)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    cases.sort();

    if cases.is_empty() {
        anyhow::bail!("No case folders found in {}", args.input.display());
    }

    println!("{} Found {} case folders", style("ℹ").blue(), cases.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let extension = match args.format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };

    let mut failed = Vec::new();
    for case in &cases {
        let case_name = case
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("case")
            .to_string();

        match process_case(case, &config) {
            Ok(grid) => {
                let content = render(&grid, args.format)?;
                let output_path = args
                    .output_dir
                    .as_deref()
                    .unwrap_or(&args.input)
                    .join(format!("{case_name}_Checks.{extension}"));
                fs::write(&output_path, content)?;
                println!(
                    "{} {} -> {}",
                    style("✓").green(),
                    case_name,
                    output_path.display()
                );
            }
            Err(e) => {
                if args.continue_on_error {
                    warn!("case {case_name} failed: {e}");
                    failed.push((case_name, e.to_string()));
                } else {
                    error!("case {case_name} failed: {e}");
                    anyhow::bail!("Processing failed for {case_name}: {e}");
                }
            }
        }
    }

    println!();
    println!(
        "{} Processed {} cases in {:?}",
        style("✓").green(),
        cases.len() - failed.len(),
        start.elapsed()
    );

    if !failed.is_empty() {
        println!("{}", style("Failed cases:").red());
        for (name, err) in &failed {
            println!("  - {name}: {err}");
        }
    }

    Ok(())
}
