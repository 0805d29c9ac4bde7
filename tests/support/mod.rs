#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};
use umya_spreadsheet::{self, Spreadsheet};

pub fn write_workbook_to_path<F>(path: &Path, f: F)
where
    F: FnOnce(&mut Spreadsheet),
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dir");
    }
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

pub struct TestWorkspace {
    _tempdir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tempdir = tempdir().expect("tempdir");
        let root = tempdir.path().to_path_buf();
        Self {
            _tempdir: tempdir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn create_workbook<F>(&self, name: &str, f: F) -> PathBuf
    where
        F: FnOnce(&mut Spreadsheet),
    {
        let path = self.path(name);
        write_workbook_to_path(&path, f);
        path
    }
}

/// The legacy layout most tests start from: metadata block in rows 1-2,
/// header row at row 4, two line items for carton 1.
pub fn standard_packing_list(book: &mut Spreadsheet) {
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet.get_cell_mut("B1").set_value("Messrs:");
    sheet.get_cell_mut("C1").set_value("Acme Co\n");
    sheet.get_cell_mut("B2").set_value("S/C#");
    sheet.get_cell_mut("C2").set_value("PO-123");

    sheet.get_cell_mut("A4").set_value("CTN");
    sheet.get_cell_mut("B4").set_value("SKU");
    sheet.get_cell_mut("C4").set_value("Quantity");
    sheet.get_cell_mut("D4").set_value("N.W");
    sheet.get_cell_mut("E4").set_value("G.W");

    sheet.get_cell_mut("A5").set_value_number(1);
    sheet.get_cell_mut("B5").set_value("A");
    sheet.get_cell_mut("C5").set_value_number(2);
    sheet.get_cell_mut("D5").set_value_number(1.0);
    sheet.get_cell_mut("E5").set_value_number(1.5);

    sheet.get_cell_mut("A6").set_value_number(1);
    sheet.get_cell_mut("B6").set_value("B");
    sheet.get_cell_mut("C6").set_value_number(3);
    sheet.get_cell_mut("D6").set_value_number(2.0);
    sheet.get_cell_mut("E6").set_value_number(2.5);
}
