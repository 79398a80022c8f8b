use crate::error::MergeResult;
use crate::types::Row;

/// Destination for transformed rows
pub trait RowSink {
    fn append(&mut self, row: Row) -> MergeResult<()>;
}

impl RowSink for Vec<Row> {
    fn append(&mut self, row: Row) -> MergeResult<()> {
        self.push(row);
        Ok(())
    }
}
