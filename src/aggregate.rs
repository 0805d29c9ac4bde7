//! Carton-level aggregation of the tabular section.
//!
//! The row located by the header scan supplies the column names; everything
//! below it is line items. Rows without a carton number are end-of-table
//! padding and are dropped. Quantities and weights that fail numeric parsing
//! coerce to zero rather than failing the run.

use crate::config::AppConfig;
use crate::error::SummaryError;
use crate::extract::PackingMetadata;
use crate::sheet::{SheetGrid, parse_number};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// One output row: a distinct carton with its joined part entries and summed
/// quantities and weights. Customer and PO are uniform across all rows of a
/// run.
#[derive(Debug, Clone, PartialEq)]
pub struct CartonSummary {
    pub carton: String,
    pub part: String,
    pub net_weight: f64,
    pub gross_weight: f64,
    pub quantity: f64,
    pub customer: String,
    pub purchase_order: String,
}

pub fn aggregate(
    grid: &SheetGrid,
    header_row: usize,
    metadata: &PackingMetadata,
    config: &AppConfig,
) -> Result<Vec<CartonSummary>, SummaryError> {
    let headers: Vec<String> = grid
        .row(header_row)
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let position = |name: &str| headers.iter().position(|header| header == name);

    let mut missing = Vec::new();
    for name in config.columns.required() {
        if position(name).is_none() {
            missing.push(name.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(SummaryError::MissingColumns(missing));
    }

    let carton_col = position(&config.columns.carton).unwrap();
    let sku_col = position(&config.columns.sku).unwrap();
    let quantity_col = position(&config.columns.quantity).unwrap();
    let net_col = position(&config.columns.net_weight).unwrap();
    let gross_col = position(&config.columns.gross_weight).unwrap();

    let mut groups: IndexMap<String, CartonSummary> = IndexMap::new();

    for r in header_row + 1..grid.row_count() {
        let carton = grid.cell(r, carton_col).trim();
        if carton.is_empty() {
            continue;
        }

        let sku = grid.cell(r, sku_col).trim();
        let quantity = parse_number(grid.cell(r, quantity_col)).unwrap_or(0.0);
        let net_weight = parse_number(grid.cell(r, net_col)).unwrap_or(0.0);
        let gross_weight = parse_number(grid.cell(r, gross_col)).unwrap_or(0.0);

        let entry = groups
            .entry(carton.to_string())
            .or_insert_with(|| CartonSummary {
                carton: carton.to_string(),
                part: String::new(),
                net_weight: 0.0,
                gross_weight: 0.0,
                quantity: 0.0,
                customer: metadata.customer.clone(),
                purchase_order: metadata.purchase_order.clone(),
            });

        if !entry.part.is_empty() {
            entry.part.push_str(" / ");
        }
        entry.part.push_str(sku);
        entry.part.push('*');
        entry.part.push_str(&format_number(quantity));

        entry.net_weight += net_weight;
        entry.gross_weight += gross_weight;
        entry.quantity += quantity;
    }

    let mut cartons: Vec<CartonSummary> = groups.into_values().collect();
    // Stable sort: cartons that fail numeric parsing land after the numeric
    // ones, keeping their first-seen relative order.
    cartons.sort_by(|a, b| compare_cartons(&a.carton, &b.carton));
    Ok(cartons)
}

fn compare_cartons(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Render a numeric value without a trailing decimal point when it is whole:
/// 3.0 prints as "3", 2.5 as "2.5".
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
