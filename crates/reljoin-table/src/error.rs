use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("row index {index} out of bounds for table with {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },

    // Columns are declared up front; widening a populated table is not
    // something the join engine ever needs.
    #[error("cannot add column '{0}' to a table that already has rows")]
    ColumnAfterRows(String),
}
