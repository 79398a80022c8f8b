//! Batch driver - merges every ledger workbook of a directory
//!
//! Files are handled one after the other. Each input workbook is read and
//! closed before the next one is opened, while a single output sink collects
//! the rows of the whole run. The output file is only written once every
//! input has been processed, so a failed run leaves no partial output.

use crate::config::{LayoutPolicy, MergeConfig};
use crate::core::{copy_rows, locate_layout, Reporter, RowSink};
use crate::error::{MergeError, MergeResult};
use crate::excel::{OutputWorkbook, WorkbookReader};
use crate::types::{cell_ref, LayoutVariant, MergeSummary, Sheet, MARKER_HEADER_ROW};
use glob::{glob, Pattern};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Layout detected for one worksheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLayout {
    pub file: PathBuf,
    pub sheet: String,
    pub layout: Option<LayoutVariant>,
}

/// Find every `.xlsx` file below `dir`, recursively, in sorted order
pub fn discover_inputs(dir: &Path) -> MergeResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Input directory \"{}\" does not exist", dir.display());
        return Ok(Vec::new());
    }

    let pattern = format!("{}/**/*.xlsx", Pattern::escape(&dir.to_string_lossy()));

    let mut inputs = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| MergeError::Io(e.into_error()))?;
        if path.is_file() {
            inputs.push(path);
        }
    }

    debug!("Found {} input workbooks under {}", inputs.len(), dir.display());
    Ok(inputs)
}

/// Run a full merge: discover inputs, copy their rows, save the output
pub fn merge(config: &MergeConfig, reporter: &dyn Reporter) -> MergeResult<MergeSummary> {
    let inputs = discover_inputs(&config.input_dir)?;
    let mut output = OutputWorkbook::new()?;

    let mut summary = merge_into(&inputs, &mut output, config.on_missing_layout, reporter)?;

    info!("Saving output file ...");
    output.save(&config.output)?;
    info!("  Done !");

    summary.output = config.output.clone();
    Ok(summary)
}

/// Copy the rows of every worksheet of `inputs` into `sink`, in file order
pub fn merge_into<S: RowSink + ?Sized>(
    inputs: &[PathBuf],
    sink: &mut S,
    policy: LayoutPolicy,
    reporter: &dyn Reporter,
) -> MergeResult<MergeSummary> {
    let mut summary = MergeSummary::default();

    for path in inputs {
        reporter.file_opened(path);
        let mut reader = WorkbookReader::open(path)?;
        debug!("  Opened !");

        for name in reader.sheet_names() {
            let sheet = reader.read_sheet(&name)?;
            merge_sheet(&sheet, sink, policy, reporter, &mut summary)?;
        }

        summary.files += 1;
    }

    Ok(summary)
}

fn merge_sheet<S: RowSink + ?Sized>(
    sheet: &Sheet,
    sink: &mut S,
    policy: LayoutPolicy,
    reporter: &dyn Reporter,
    summary: &mut MergeSummary,
) -> MergeResult<()> {
    let variant = match locate_layout(sheet) {
        Ok(variant) => variant,
        Err(MergeError::LayoutNotFound { .. }) if policy == LayoutPolicy::SkipSheet => {
            reporter.layout_missing(&sheet.name);
            summary.sheets_skipped += 1;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let marker_cell = cell_ref(MARKER_HEADER_ROW, variant.columns().marker);
    reporter.layout_found(&sheet.name, variant, &marker_cell);

    let stats = copy_rows(sheet, variant.columns(), sink, reporter)?;
    summary.add(stats);
    Ok(())
}

/// Report the layout of every worksheet below `dir` without copying anything
pub fn detect(dir: &Path) -> MergeResult<Vec<SheetLayout>> {
    let mut layouts = Vec::new();

    for path in discover_inputs(dir)? {
        let mut reader = WorkbookReader::open(&path)?;
        for sheet in reader.read_all()? {
            layouts.push(SheetLayout {
                file: path.clone(),
                layout: locate_layout(&sheet).ok(),
                sheet: sheet.name,
            });
        }
    }

    Ok(layouts)
}
