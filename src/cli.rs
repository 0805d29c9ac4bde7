//! Batch driver: one workbook in, one CSV beside it.

use crate::config::AppConfig;
use crate::error::SummaryError;
use crate::{pipeline, report};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Process `file` (prompting for a base name when omitted) and write
/// `<base>-res.csv` next to the input.
pub fn run(file: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => prompt_for_file()?,
    };

    if !path.exists() {
        return Err(SummaryError::InputNotFound { path }.into());
    }

    let report_data = pipeline::summarize_file(&path, config)?;

    let output_name = report::output_filename(&path);
    let output_path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(&output_name),
        _ => PathBuf::from(&output_name),
    };

    let output_file = fs::File::create(&output_path)
        .with_context(|| format!("failed to create {:?}", output_path))?;
    report::write_csv(&report_data, output_file)?;

    tracing::info!(
        cartons = report_data.cartons.len(),
        output = %output_path.display(),
        "summary written"
    );
    println!("Successfully created '{}'", output_path.display());
    Ok(())
}

fn prompt_for_file() -> Result<PathBuf> {
    print!("Please enter the filename (without extension): ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read filename from stdin")?;

    Ok(PathBuf::from(format!("{}.xlsx", line.trim())))
}
