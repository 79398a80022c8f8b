use std::path::PathBuf;
use thiserror::Error;

pub type MergeResult<T> = Result<T, MergeError>;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Could not find BP04 marker in sheet '{sheet}' (checked D6 and C6)")]
    LayoutNotFound { sheet: String },

    #[error("Unparseable amount '{value}' in sheet '{sheet}', row {row}")]
    AmountParse {
        sheet: String,
        row: usize,
        value: String,
    },
}

impl From<rust_xlsxwriter::XlsxError> for MergeError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        MergeError::Export(err.to_string())
    }
}

impl From<glob::PatternError> for MergeError {
    fn from(err: glob::PatternError) -> Self {
        MergeError::Pattern(err.to_string())
    }
}
