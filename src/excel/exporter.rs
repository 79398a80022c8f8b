//! Consolidated workbook writer

use crate::core::RowSink;
use crate::error::{MergeError, MergeResult};
use crate::types::{CellValue, Row, OUTPUT_HEADER};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Name of the single output worksheet
const OUTPUT_SHEET_NAME: &str = "Sheet";

/// Number format applied to date cells
const DATE_FORMAT: &str = "dd/mm/yyyy";

/// Output workbook: one sheet, header row first, then appended rows.
///
/// Nothing touches the filesystem until `save`.
pub struct OutputWorkbook {
    worksheet: Worksheet,
    date_format: Format,
    next_row: u32,
}

impl OutputWorkbook {
    /// Create the output sheet and write the fixed header row
    pub fn new() -> MergeResult<Self> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(OUTPUT_SHEET_NAME)?;

        for (col, title) in OUTPUT_HEADER.iter().enumerate() {
            if let Some(title) = title {
                worksheet.write_string(0, column_index(col)?, *title)?;
            }
        }

        Ok(Self {
            worksheet,
            date_format: Format::new().set_num_format(DATE_FORMAT),
            next_row: 1,
        })
    }

    /// Number of data rows appended so far (header excluded)
    pub fn rows_written(&self) -> usize {
        (self.next_row - 1) as usize
    }

    /// Write the workbook to `path`
    pub fn save(self, path: &Path) -> MergeResult<()> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(self.worksheet);
        workbook
            .save(path)
            .map_err(|e| MergeError::Export(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }
}

impl RowSink for OutputWorkbook {
    fn append(&mut self, row: Row) -> MergeResult<()> {
        let row_idx = self.next_row;

        for (col, cell) in row.cells.iter().enumerate() {
            let col = column_index(col)?;
            match cell {
                CellValue::Text(s) => {
                    self.worksheet.write_string(row_idx, col, s)?;
                }
                CellValue::Number(n) => {
                    self.worksheet.write_number(row_idx, col, *n)?;
                }
                CellValue::Bool(b) => {
                    self.worksheet.write_boolean(row_idx, col, *b)?;
                }
                CellValue::Date(serial) => {
                    self.worksheet
                        .write_number_with_format(row_idx, col, *serial, &self.date_format)?;
                }
                CellValue::Empty => {}
            }
        }

        self.next_row += 1;
        Ok(())
    }
}

fn column_index(col: usize) -> MergeResult<u16> {
    u16::try_from(col).map_err(|_| MergeError::Export(format!("Column {} out of range", col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn read_back(path: &Path) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        workbook.worksheet_range(OUTPUT_SHEET_NAME).unwrap()
    }

    #[test]
    fn test_new_workbook_has_no_data_rows() {
        let output = OutputWorkbook::new().unwrap();
        assert_eq!(output.rows_written(), 0);
    }

    #[test]
    fn test_header_written_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.xlsx");

        OutputWorkbook::new().unwrap().save(&path).unwrap();

        let range = read_back(&path);
        assert_eq!(range.height(), 1);
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("No Compte".to_string()))
        );
        assert_eq!(range.get_value((0, 1)), Some(&Data::Empty));
        assert_eq!(
            range.get_value((0, 18)),
            Some(&Data::String("Libellé écriture".to_string()))
        );
    }

    #[test]
    fn test_append_rows_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.xlsx");

        let mut output = OutputWorkbook::new().unwrap();
        output
            .append(Row::new(vec![
                "401000".into(),
                CellValue::Empty,
                "01/01/2024".into(),
            ]))
            .unwrap();
        output.append(Row::new(vec![CellValue::Number(12.5)])).unwrap();
        assert_eq!(output.rows_written(), 2);
        output.save(&path).unwrap();

        let range = read_back(&path);
        assert_eq!(range.height(), 3);
        assert_eq!(
            range.get_value((1, 2)),
            Some(&Data::String("01/01/2024".to_string()))
        );
        assert_eq!(range.get_value((2, 0)), Some(&Data::Float(12.5)));
    }

    #[test]
    fn test_bool_and_date_cells_keep_their_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.xlsx");

        let mut output = OutputWorkbook::new().unwrap();
        output
            .append(Row::new(vec![
                CellValue::Bool(true),
                CellValue::Date(45323.0),
            ]))
            .unwrap();
        output.save(&path).unwrap();

        let range = read_back(&path);
        assert_eq!(range.get_value((1, 0)), Some(&Data::Bool(true)));
        match range.get_value((1, 1)) {
            Some(Data::DateTime(dt)) => assert_eq!(dt.as_f64(), 45323.0),
            other => panic!("expected a date cell, got {:?}", other),
        }
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("output.xlsx");

        let result = OutputWorkbook::new().unwrap().save(&path);
        assert!(matches!(result, Err(MergeError::Export(_))));
    }
}
