//! Ledger copy engine: layout detection and row transformation

pub mod marker;
pub mod report;
pub mod sink;
pub mod transformer;

pub use marker::{locate_layout, MARKER_CANDIDATES};
pub use report::{Reporter, TracingReporter};
pub use sink::RowSink;
pub use transformer::{copy_rows, parse_amount, RowOutcome, RowTransformer, TransformError};
