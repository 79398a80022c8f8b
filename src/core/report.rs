//! Progress reporting for a merge run

use crate::types::{CopyStats, LayoutVariant};
use std::path::Path;
use tracing::{info, warn};

/// Receives progress notifications from the driver and the row copier.
///
/// Every method but `progress` and `finished` has a no-op default.
pub trait Reporter {
    fn file_opened(&self, _path: &Path) {}

    fn layout_found(&self, _sheet: &str, _variant: LayoutVariant, _cell: &str) {}

    fn layout_missing(&self, _sheet: &str) {}

    /// Called every `PROGRESS_EVERY` copied rows
    fn progress(&self, sheet: &str, stats: CopyStats);

    /// Called once a worksheet has been fully read
    fn finished(&self, sheet: &str, stats: CopyStats);
}

/// Reporter that logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn file_opened(&self, path: &Path) {
        info!("Opening \"{}\" ...", path.display());
    }

    fn layout_found(&self, sheet: &str, variant: LayoutVariant, cell: &str) {
        info!(sheet, %variant, "  BP04 at {} !", cell);
    }

    fn layout_missing(&self, sheet: &str) {
        warn!(sheet, "  No BP04 marker at D6 or C6, skipping sheet");
    }

    fn progress(&self, sheet: &str, stats: CopyStats) {
        info!(
            sheet,
            "  Copied {} rows on {} input rows ...",
            stats.rows_copied, stats.rows_read
        );
    }

    fn finished(&self, sheet: &str, stats: CopyStats) {
        info!(
            sheet,
            "  Finished (with {} / {} rows) !", stats.rows_copied, stats.rows_read
        );
    }
}
