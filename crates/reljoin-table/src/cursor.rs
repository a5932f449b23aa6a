//! Index-based positional traversal.
//!
//! A cursor is private, single-threaded state over one borrowed table: move
//! to a row, move to a column, read the cell. Positioning methods take
//! `&mut self`, so a cursor cannot be shared between concurrent consumers.

use reljoin_core::prelude::Scalar;

use crate::error::TableError;
use crate::table::{RowView, Table};

#[derive(Debug)]
pub struct Cursor<'a> {
    table: &'a Table,
    row: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(table: &'a Table) -> Self {
        Self { table, row: 0, col: 0 }
    }

    pub fn move_to_row(&mut self, row: usize) -> Result<&mut Self, TableError> {
        if row >= self.table.row_count() {
            return Err(TableError::RowOutOfBounds {
                index: row,
                rows: self.table.row_count(),
            });
        }
        self.row = row;
        Ok(self)
    }

    /// Position on the first column with this name.
    pub fn move_to_column(&mut self, name: &str) -> Result<&mut Self, TableError> {
        let col = self
            .table
            .schema()
            .index_of(name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        self.col = col;
        Ok(self)
    }

    /// The cell at the current position.
    pub fn value(&self) -> Result<&'a Scalar, TableError> {
        self.table
            .value(self.row, self.col)
            .ok_or(TableError::RowOutOfBounds {
                index: self.row,
                rows: self.table.row_count(),
            })
    }

    /// Snapshot of the current row.
    pub fn row_view(&self) -> Result<RowView<'a>, TableError> {
        self.table.row(self.row)
    }

    pub fn row_index(&self) -> usize {
        self.row
    }

    /// The table this cursor traverses.
    pub fn table(&self) -> &'a Table {
        self.table
    }
}
