//! In-memory view of a workbook's first worksheet.
//!
//! The whole sheet is materialized as a rectangular grid of cell strings so
//! the metadata pass, the header-location pass, and the data pass can each
//! walk it independently without re-reading the file.

use anyhow::{Context, Result, anyhow};
use std::io::Cursor;
use std::path::Path;
use umya_spreadsheet::reader::xlsx;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// Row-major grid of untyped cell values. Empty cells are empty strings.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// Parse the workbook at `path` and snapshot its first worksheet.
    pub fn load(path: &Path) -> Result<Self> {
        let book =
            xlsx::read(path).with_context(|| format!("failed to parse workbook {:?}", path))?;
        Self::from_book(&book)
    }

    /// Parse an uploaded workbook held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let book = xlsx::read_reader(Cursor::new(bytes), true)
            .context("failed to parse uploaded workbook")?;
        Self::from_book(&book)
    }

    fn from_book(book: &Spreadsheet) -> Result<Self> {
        let sheet = book
            .get_sheet_collection()
            .first()
            .ok_or_else(|| anyhow!("workbook has no worksheets"))?;
        Ok(Self::from_worksheet(sheet))
    }

    pub fn from_worksheet(sheet: &Worksheet) -> Self {
        let (max_col, max_row) = sheet.get_highest_column_and_row();
        let mut rows = vec![vec![String::new(); max_col as usize]; max_row as usize];
        for cell in sheet.get_cell_collection() {
            let coord = cell.get_coordinate();
            let row = *coord.get_row_num() as usize;
            let col = *coord.get_col_num() as usize;
            if row == 0 || col == 0 {
                continue;
            }
            let value = cell.get_value();
            if value.is_empty() {
                continue;
            }
            rows[row - 1][col - 1] = value.to_string();
        }
        Self { rows }
    }

    /// Build a grid directly from rows; ragged rows are allowed and read as
    /// empty past their end.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn row(&self, index: usize) -> &[String] {
        self.rows.get(index).map(|row| row.as_slice()).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|row| row.get(col))
            .map(|value| value.as_str())
            .unwrap_or("")
    }
}

/// Coerce a cell string to a number. Empty and unparseable values yield
/// `None`; callers decide whether that means "zero" or "skip".
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}
