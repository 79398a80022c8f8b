//! Ledger workbook fixtures shared by the integration tests

#![allow(dead_code)]

use calamine::{open_workbook, Data, Reader, Xlsx};
use ledger_merge::types::MARKER_HEADER_ROW;
use ledger_merge::{CellValue, LayoutVariant, Row};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Header block of a ledger sheet: a title on row 1, then row 6 carrying the
/// `BP04` marker where `layout` expects it (no marker for `None`).
pub fn header_rows(layout: Option<LayoutVariant>) -> Vec<Row> {
    let mut rows = vec![Row::default(); MARKER_HEADER_ROW];
    rows[0].set(0, "Grand livre".into());

    let mut marker = Row::default();
    marker.set(0, "Edition".into());
    if let Some(layout) = layout {
        marker.set(layout.columns().marker, "BP04".into());
    }
    rows.push(marker);
    rows
}

/// Marker row opening the account block `account`
pub fn marker_row(layout: LayoutVariant, account: &str) -> Row {
    let columns = layout.columns();
    let mut row = Row::default();
    row.set(columns.marker, "BP04".into());
    row.set(columns.account_src, account.into());
    row
}

/// Ledger line dated `date` (column C) with `amount` in column R
pub fn entry_row(date: &str, label: &str, amount: CellValue) -> Row {
    let mut row = Row::default();
    row.set(2, date.into());
    row.set(4, "AC".into());
    row.set(11, label.into());
    row.set(15, "EUR".into());
    row.set(17, amount);
    row
}

/// Sheet in `layout` with one account block of `count` dated lines
pub fn ledger_sheet(layout: LayoutVariant, account: &str, count: usize) -> Vec<Row> {
    let mut rows = header_rows(Some(layout));
    rows.push(marker_row(layout, account));
    for i in 0..count {
        rows.push(entry_row(
            &format!("{:02}.01.2024", i + 1),
            &format!("{} line {}", account, i + 1),
            CellValue::Text(format!("1 000,{:02}", i)),
        ));
    }
    rows.push(entry_row("Total compte", "", CellValue::Empty));
    rows
}

/// Write a workbook with the given sheets to `path`
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Row>)]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                match cell {
                    CellValue::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, s).unwrap();
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(r as u32, c as u16, *b).unwrap();
                    }
                    CellValue::Date(serial) => {
                        worksheet
                            .write_number_with_format(r as u32, c as u16, *serial, &date_format)
                            .unwrap();
                    }
                    CellValue::Empty => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Read back the consolidated sheet as rows of calamine cells
pub fn read_output(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&name).unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

pub fn text(s: &str) -> Data {
    Data::String(s.to_string())
}
