//! Workbook I/O for the merge
//!
//! - Import: ledger workbooks (.xlsx) → in-memory sheets
//! - Export: transformed rows → consolidated workbook (.xlsx)

mod exporter;
mod importer;

pub use exporter::OutputWorkbook;
pub use importer::WorkbookReader;
