use assert_matches::assert_matches;
use packlist_summary::config::AppConfig;
use packlist_summary::error::SummaryError;
use packlist_summary::extract::{locate_header, scan_metadata};
use packlist_summary::sheet::SheetGrid;

fn grid(rows: &[&[&str]]) -> SheetGrid {
    SheetGrid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

#[test]
fn metadata_found_next_to_labels() {
    let grid = grid(&[
        &["", "Messrs:", "Acme Co", ""],
        &["", "S/C#", "PO-123", ""],
    ]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "Acme Co");
    assert_eq!(metadata.purchase_order, "PO-123");
}

#[test]
fn customer_newlines_collapse_to_spaces() {
    let grid = grid(&[&["Messrs:", "Acme\nTrading Co\n", ""]]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "Acme Trading Co");
}

#[test]
fn last_label_match_wins_in_row_major_order() {
    let grid = grid(&[
        &["Messrs:", "First Co", ""],
        &["Messrs:", "Second Co", ""],
    ]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "Second Co");
}

#[test]
fn missing_labels_leave_empty_strings() {
    let grid = grid(&[&["just", "some", "cells"]]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "");
    assert_eq!(metadata.purchase_order, "");
}

#[test]
fn label_in_last_column_has_no_value_cell() {
    // The value lives to the right of the label, so a label in the final
    // column can never bind one.
    let grid = grid(&[&["", "Messrs:"]]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "");
}

#[test]
fn labels_outside_scan_window_are_ignored() {
    let grid = grid(&[
        &["", ""],
        &["", ""],
        &["", ""],
        &["", ""],
        &["", ""],
        &["Messrs:", "Too Late Co"],
    ]);
    let metadata = scan_metadata(&grid, &AppConfig::default());
    assert_eq!(metadata.customer, "");
}

#[test]
fn header_located_inside_window() {
    let grid = grid(&[
        &["free-form", ""],
        &["CTN", "SKU"],
    ]);
    assert_eq!(locate_header(&grid, &AppConfig::default()).unwrap(), 1);
}

#[test]
fn header_sentinel_matched_as_substring() {
    let grid = grid(&[&["CTN NO.", "SKU"]]);
    assert_eq!(locate_header(&grid, &AppConfig::default()).unwrap(), 0);
}

#[test]
fn header_found_by_full_scan_fallback() {
    let mut rows: Vec<Vec<String>> = vec![vec!["filler".to_string()]; 9];
    rows.push(vec!["CTN".to_string(), "SKU".to_string()]);
    let grid = SheetGrid::from_rows(rows);
    assert_eq!(locate_header(&grid, &AppConfig::default()).unwrap(), 9);
}

#[test]
fn header_absent_everywhere_fails() {
    let grid = grid(&[&["no", "header"], &["here", "either"]]);
    let error = locate_header(&grid, &AppConfig::default()).unwrap_err();
    assert_matches!(error, SummaryError::HeaderNotFound { sentinel } if sentinel == "CTN");
}

#[test]
fn sentinel_only_counts_in_first_column() {
    let grid = grid(&[&["Item", "CTN"], &["row", "values"]]);
    assert_matches!(
        locate_header(&grid, &AppConfig::default()),
        Err(SummaryError::HeaderNotFound { .. })
    );
}
