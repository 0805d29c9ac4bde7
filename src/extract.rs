//! Metadata extraction and header location over the raw grid.
//!
//! The metadata block is free-form: labels can sit in any cell of the first
//! few rows, with the value in the cell immediately to the right. The scan is
//! row-major and the last match wins, matching the legacy sheets this was
//! built against.

use crate::config::AppConfig;
use crate::error::SummaryError;
use crate::sheet::SheetGrid;

/// Customer and purchase-order values lifted from the header block.
/// Missing labels leave the field empty rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingMetadata {
    pub customer: String,
    pub purchase_order: String,
}

pub fn scan_metadata(grid: &SheetGrid, config: &AppConfig) -> PackingMetadata {
    let mut customer = String::new();
    let mut purchase_order = String::new();

    let window = grid.row_count().min(config.scan_rows);
    for r in 0..window {
        let row = grid.row(r);
        if row.len() < 2 {
            continue;
        }
        for c in 0..row.len() - 1 {
            let value = &row[c];
            if value.contains(&config.customer_label) {
                customer = row[c + 1].trim().to_string();
            }
            if value.contains(&config.po_label) {
                purchase_order = row[c + 1].trim().to_string();
            }
        }
    }

    // Customer cells on legacy sheets sometimes wrap across lines.
    let customer = customer.replace('\n', " ").trim().to_string();

    PackingMetadata {
        customer,
        purchase_order,
    }
}

/// Find the zero-based row whose first cell contains the sentinel token.
///
/// The scan window covers the same leading rows as the metadata pass; if the
/// sentinel is not there, the whole sheet is scanned before giving up.
pub fn locate_header(grid: &SheetGrid, config: &AppConfig) -> Result<usize, SummaryError> {
    let window = grid.row_count().min(config.scan_rows);
    for r in 0..window {
        if grid.cell(r, 0).contains(&config.sentinel) {
            return Ok(r);
        }
    }

    for r in 0..grid.row_count() {
        if grid.cell(r, 0).contains(&config.sentinel) {
            return Ok(r);
        }
    }

    Err(SummaryError::HeaderNotFound {
        sentinel: config.sentinel.clone(),
    })
}
