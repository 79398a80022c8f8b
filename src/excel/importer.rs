//! Ledger workbook reader - Excel (.xlsx) → sheets of cell values

use crate::error::{MergeError, MergeResult};
use crate::types::{CellValue, Row, Sheet};
use calamine::{open_workbook, Data, Range, Reader, SheetType, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// An opened input workbook. Dropping it closes the file.
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl WorkbookReader {
    /// Open an .xlsx workbook for reading
    pub fn open<P: AsRef<Path>>(path: P) -> MergeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook: Xlsx<_> = open_workbook(&path).map_err(|e| MergeError::Workbook {
            path: path.clone(),
            message: format!("Failed to open Excel file: {}", e),
        })?;

        Ok(Self { path, workbook })
    }

    /// Names of the worksheets in workbook order (chart sheets excluded)
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook
            .sheets_metadata()
            .iter()
            .filter(|meta| matches!(meta.typ, SheetType::WorkSheet))
            .map(|meta| meta.name.clone())
            .collect()
    }

    /// Load one worksheet, rows and columns anchored at A1
    pub fn read_sheet(&mut self, name: &str) -> MergeResult<Sheet> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| MergeError::Workbook {
                path: self.path.clone(),
                message: format!("Failed to read sheet '{}': {}", name, e),
            })?;

        Ok(Sheet::new(name, anchored_rows(&range)))
    }

    /// Load every worksheet in workbook order
    pub fn read_all(&mut self) -> MergeResult<Vec<Sheet>> {
        self.sheet_names()
            .iter()
            .map(|name| self.read_sheet(name))
            .collect()
    }
}

/// Expand a used range into rows starting at A1.
///
/// calamine trims leading empty rows and columns; ledger positions are
/// absolute, so the gap is filled back with empty cells.
fn anchored_rows(range: &Range<Data>) -> Vec<Row> {
    let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
    else {
        return Vec::new();
    };

    let width = end_col as usize + 1;
    let mut rows = vec![Row::new(vec![CellValue::Empty; width]); start_row as usize];

    for data_row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(data_row.iter().map(convert_cell));
        rows.push(Row::new(cells));
    }

    debug_assert_eq!(rows.len(), end_row as usize + 1);
    rows
}

/// Convert a calamine cell to a ledger cell value
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Date(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Keep the displayed error code, e.g. "#N/A"
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
