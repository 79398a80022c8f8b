//! Row transformer - copies ledger lines into the consolidated layout
//!
//! Walks a worksheet top to bottom carrying the account announced by the last
//! `BP04` marker row. Every row whose date column starts with `DD.MM.YYYY` is
//! emitted with:
//! - the date rewritten as `DD/MM/YYYY`
//! - column A overwritten with the running account
//! - a textual amount converted to a number

use crate::core::report::Reporter;
use crate::core::sink::RowSink;
use crate::error::{MergeError, MergeResult};
use crate::types::{CellValue, ColumnLayout, CopyStats, Row, Sheet, MARKER, PROGRESS_EVERY};
use regex::Regex;
use std::iter::Enumerate;
use std::slice::Iter;
use thiserror::Error;

/// Start of a dotted date; anything after the year is ignored
const DATE_PATTERN: &str = r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}";

#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    /// `row` is 1-based, as displayed by spreadsheet tools
    #[error("Unparseable amount '{value}' at row {row}")]
    AmountParse { row: usize, value: String },
}

/// What to do with one input row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Row qualifies; append this rewritten copy
    Emit(Row),
    /// Row has no dotted date
    Skip,
}

/// Lazy per-row transformation of one worksheet
pub struct RowTransformer<'a> {
    rows: Enumerate<Iter<'a, Row>>,
    layout: ColumnLayout,
    date_pattern: Regex,
    account: Option<CellValue>,
}

impl<'a> RowTransformer<'a> {
    pub fn new(rows: &'a [Row], layout: ColumnLayout) -> MergeResult<Self> {
        let date_pattern =
            Regex::new(DATE_PATTERN).map_err(|e| MergeError::Pattern(e.to_string()))?;

        Ok(Self {
            rows: rows.iter().enumerate(),
            layout,
            date_pattern,
            account: None,
        })
    }

    /// Account that the next emitted row would receive
    pub fn account(&self) -> Option<&CellValue> {
        self.account.as_ref()
    }

    /// Transform a single row. `index` is the 0-based row position.
    pub fn transform_row(&mut self, index: usize, row: &Row) -> Result<RowOutcome, TransformError> {
        // Marker rows open a new account block, effective from this row on
        if row.get(self.layout.marker).is_text(MARKER) {
            self.account = Some(row.get(self.layout.account_src).clone());
        }

        let date = match row.get(self.layout.date).as_text() {
            Some(text) if self.date_pattern.is_match(text) => text.replace('.', "/"),
            _ => return Ok(RowOutcome::Skip),
        };

        let mut output = row.clone();
        output.set(self.layout.date, CellValue::Text(date));
        output.set(
            self.layout.account_dst,
            self.account.clone().unwrap_or_default(),
        );

        if let Some(text) = row.get(self.layout.amount).as_text() {
            let amount = parse_amount(text).ok_or_else(|| TransformError::AmountParse {
                row: index + 1,
                value: text.to_string(),
            })?;
            output.set(self.layout.amount, CellValue::Number(amount));
        }

        Ok(RowOutcome::Emit(output))
    }
}

impl Iterator for RowTransformer<'_> {
    type Item = Result<RowOutcome, TransformError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, row) = self.rows.next()?;
        Some(self.transform_row(index, row))
    }
}

/// Parse a textual amount such as `"1 234,56"` or `"-1,234.50"`.
///
/// Spaces (including non-breaking ones) are stripped. A lone trailing comma
/// followed by one or two digits, with no dot anywhere, is a decimal comma;
/// any other comma is a thousands separator.
pub fn parse_amount(text: &str) -> Option<f64> {
    let compact: String = text
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .collect();

    let normalized = match compact.rfind(',') {
        Some(pos) if !compact.contains('.') && is_decimal_tail(&compact[pos + 1..]) => {
            format!("{}.{}", compact[..pos].replace(',', ""), &compact[pos + 1..])
        }
        _ => compact.replace(',', ""),
    };

    normalized.parse::<f64>().ok()
}

fn is_decimal_tail(tail: &str) -> bool {
    (1..=2).contains(&tail.len()) && tail.chars().all(|c| c.is_ascii_digit())
}

/// Copy the qualifying rows of `sheet` into `sink`.
///
/// Reports progress every `PROGRESS_EVERY` appended rows and a summary once
/// the sheet is exhausted. Stops at the first unparseable amount.
pub fn copy_rows<S: RowSink + ?Sized>(
    sheet: &Sheet,
    layout: ColumnLayout,
    sink: &mut S,
    reporter: &dyn Reporter,
) -> MergeResult<CopyStats> {
    let transformer = RowTransformer::new(&sheet.rows, layout)?;
    let mut stats = CopyStats::default();

    for outcome in transformer {
        stats.rows_read += 1;

        match outcome {
            Ok(RowOutcome::Emit(row)) => {
                sink.append(row)?;
                stats.rows_copied += 1;
                if stats.rows_copied % PROGRESS_EVERY == 0 {
                    reporter.progress(&sheet.name, stats);
                }
            }
            Ok(RowOutcome::Skip) => {}
            Err(TransformError::AmountParse { row, value }) => {
                return Err(MergeError::AmountParse {
                    sheet: sheet.name.clone(),
                    row,
                    value,
                });
            }
        }
    }

    reporter.finished(&sheet.name, stats);
    Ok(stats)
}
