use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

//==============================================================================
// Fixed ledger constants
//==============================================================================

/// Marker value announcing a new account block
pub const MARKER: &str = "BP04";

/// Header row (0-based) holding the layout marker (row 6 in Excel)
pub const MARKER_HEADER_ROW: usize = 5;

/// Column holding the booking date, shared by both layouts (C)
pub const DATE_COLUMN: usize = 2;

/// Column overwritten with the running account, shared by both layouts (A)
pub const ACCOUNT_DST_COLUMN: usize = 0;

/// Column holding the amount, shared by both layouts (R)
pub const AMOUNT_COLUMN: usize = 17;

/// Appends between two progress notifications
pub const PROGRESS_EVERY: usize = 1000;

/// Header of the consolidated sheet. `None` entries are left blank.
pub const OUTPUT_HEADER: [Option<&str>; 19] = [
    Some("No Compte"),
    None,
    Some("Date Comptable"),
    None,
    Some("Code Journal"),
    None,
    Some("No Piece"),
    None,
    Some("Date piece"),
    Some("CC"),
    Some("CN"),
    Some("Descriptif"),
    None,
    None,
    None,
    Some("Devise"),
    Some("Montant (Devise)"),
    Some("Montant (Euro)"),
    Some("Libellé écriture"),
];

//==============================================================================
// Cells and rows
//==============================================================================

/// A single cell value read from (or written to) a worksheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Textual cell
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Boolean cell, never treated as text
    Bool(bool),
    /// Date cell, stored as the Excel serial value
    Date(f64),
    /// Blank or missing cell
    #[default]
    Empty,
}

impl CellValue {
    /// Borrow the text of a `Text` cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// True if this is a text cell equal to `value`
    pub fn is_text(&self, value: &str) -> bool {
        self.as_text() == Some(value)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) | CellValue::Date(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Empty => Ok(()),
        }
    }
}

/// One worksheet row, indexed from column A
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Cell at `col`, `Empty` past the end of the row
    pub fn get(&self, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cells.get(col).unwrap_or(EMPTY)
    }

    /// Overwrite the cell at `col`, growing the row with blanks if needed
    pub fn set(&mut self, col: usize, value: CellValue) {
        if col >= self.cells.len() {
            self.cells.resize(col + 1, CellValue::Empty);
        }
        self.cells[col] = value;
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T: Into<CellValue>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A worksheet loaded in memory, rows absolute from row 1
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Cell at a 0-based (row, col) position, `Empty` when out of range
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows.get(row).map_or(EMPTY, |r| r.get(col))
    }
}

//==============================================================================
// Layouts
//==============================================================================

/// Which of the two known ledger layouts a worksheet uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutVariant {
    /// Marker in column D, account in column H
    Primary,
    /// Marker in column C, account in column G
    Fallback,
}

impl LayoutVariant {
    /// Column positions for this variant
    pub fn columns(self) -> ColumnLayout {
        match self {
            LayoutVariant::Primary => ColumnLayout {
                variant: self,
                marker: 3,
                account_src: 7,
                date: DATE_COLUMN,
                account_dst: ACCOUNT_DST_COLUMN,
                amount: AMOUNT_COLUMN,
            },
            LayoutVariant::Fallback => ColumnLayout {
                variant: self,
                marker: 2,
                account_src: 6,
                date: DATE_COLUMN,
                account_dst: ACCOUNT_DST_COLUMN,
                amount: AMOUNT_COLUMN,
            },
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutVariant::Primary => write!(f, "primary"),
            LayoutVariant::Fallback => write!(f, "fallback"),
        }
    }
}

/// Column positions (0-based) used while copying one worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub variant: LayoutVariant,
    pub marker: usize,
    pub account_src: usize,
    pub date: usize,
    pub account_dst: usize,
    pub amount: usize,
}

//==============================================================================
// Run statistics
//==============================================================================

/// Row counts for one copied worksheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    pub rows_read: usize,
    pub rows_copied: usize,
}

/// Totals for a whole merge run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeSummary {
    pub files: usize,
    pub sheets: usize,
    pub sheets_skipped: usize,
    pub rows_read: usize,
    pub rows_copied: usize,
    pub output: PathBuf,
}

impl MergeSummary {
    pub fn add(&mut self, stats: CopyStats) {
        self.sheets += 1;
        self.rows_read += stats.rows_read;
        self.rows_copied += stats.rows_copied;
    }
}

/// Convert a 0-based column index to its Excel letter (0→A, 25→Z, 26→AA)
pub fn column_letter(n: usize) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// Excel-style reference for a 0-based (row, col) position, e.g. (5, 3) → "D6"
pub fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}
