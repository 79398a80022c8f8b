//! ledger-merge - consolidate ledger workbooks into a single sheet
//!
//! Every `.xlsx` file found under an input directory is scanned worksheet by
//! worksheet. The `BP04` marker on row 6 selects the column layout, marker
//! rows announce the account of the lines that follow, and every line dated
//! `DD.MM.YYYY` is copied to one output sheet with:
//!
//! - the date rewritten as `DD/MM/YYYY`
//! - the running account stamped into column A
//! - textual amounts converted to numbers
//!
//! # Example
//!
//! ```no_run
//! use ledger_merge::config::MergeConfig;
//! use ledger_merge::core::TracingReporter;
//! use ledger_merge::driver;
//!
//! let config = MergeConfig::new("input", "output.xlsx");
//! let summary = driver::merge(&config, &TracingReporter)?;
//!
//! println!("Copied {} of {} rows", summary.rows_copied, summary.rows_read);
//! # Ok::<(), ledger_merge::error::MergeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{MergeError, MergeResult};
pub use types::{CellValue, LayoutVariant, MergeSummary, Row, Sheet};
