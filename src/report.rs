//! CSV serialization of a packing report.

use crate::aggregate::format_number;
use crate::pipeline::PackingReport;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Fixed output column order.
pub const OUTPUT_COLUMNS: [&str; 7] = ["CTN", "Part", "NW", "GW", "QTY", "Customer", "PO"];

pub fn write_csv<W: Write>(report: &PackingReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(OUTPUT_COLUMNS)
        .context("failed to write CSV header")?;

    for row in &report.cartons {
        let net_weight = format_number(row.net_weight);
        let gross_weight = format_number(row.gross_weight);
        let quantity = format_number(row.quantity);
        csv_writer
            .write_record([
                row.carton.as_str(),
                row.part.as_str(),
                net_weight.as_str(),
                gross_weight.as_str(),
                quantity.as_str(),
                row.customer.as_str(),
                row.purchase_order.as_str(),
            ])
            .with_context(|| format!("failed to write CSV row for carton {}", row.carton))?;
    }

    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

pub fn csv_bytes(report: &PackingReport) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(buffer)
}

/// Output artifact name: input base name (extension stripped) plus `-res.csv`.
pub fn output_filename(input: &Path) -> String {
    let base = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook".to_string());
    format!("{base}-res.csv")
}
