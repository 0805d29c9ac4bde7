//! The single transformation both drivers call: raw sheet in, ordered
//! carton summaries out.

use crate::aggregate::{self, CartonSummary};
use crate::config::AppConfig;
use crate::error::SummaryError;
use crate::extract::{self, PackingMetadata};
use crate::sheet::SheetGrid;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PackingReport {
    pub metadata: PackingMetadata,
    pub cartons: Vec<CartonSummary>,
}

pub fn summarize(grid: &SheetGrid, config: &AppConfig) -> Result<PackingReport, SummaryError> {
    let metadata = extract::scan_metadata(grid, config);
    let header_row = extract::locate_header(grid, config)?;
    tracing::debug!(
        header_row,
        customer = %metadata.customer,
        purchase_order = %metadata.purchase_order,
        "located tabular section"
    );

    let cartons = aggregate::aggregate(grid, header_row, &metadata, config)?;
    tracing::info!(cartons = cartons.len(), "aggregated packing list");

    Ok(PackingReport { metadata, cartons })
}

pub fn summarize_file(path: &Path, config: &AppConfig) -> Result<PackingReport, SummaryError> {
    let grid = SheetGrid::load(path)?;
    summarize(&grid, config)
}

pub fn summarize_bytes(bytes: &[u8], config: &AppConfig) -> Result<PackingReport, SummaryError> {
    let grid = SheetGrid::from_bytes(bytes)?;
    summarize(&grid, config)
}
