//! Digest-keyed grouping of rows by one column's distinct values.
//!
//! The map is immutable once built; lookups re-check content equality against
//! the group's representative key, so a digest hit never silently pairs
//! distinct values.

use std::collections::HashMap;

use reljoin_core::prelude::{key_digest, Hash256, Scalar};

use crate::error::TableError;
use crate::table::Table;

#[derive(Debug)]
pub struct TableGrouping {
    column: String,
    groups: HashMap<Hash256, Group>,
}

#[derive(Debug)]
struct Group {
    key: Scalar,
    rows: Table,
}

impl TableGrouping {
    pub(crate) fn build(table: &Table, column: &str) -> Result<Self, TableError> {
        let col = table
            .schema()
            .index_of(column)
            .ok_or_else(|| TableError::UnknownColumn(column.to_string()))?;

        let mut groups: HashMap<Hash256, Group> = HashMap::new();
        for row in 0..table.row_count() {
            let value = table
                .value(row, col)
                .ok_or(TableError::RowOutOfBounds {
                    index: row,
                    rows: table.row_count(),
                })?;
            let digest = key_digest(value);
            groups
                .entry(digest)
                .or_insert_with(|| Group {
                    key: value.clone(),
                    rows: Table::with_schema(table.schema().clone()),
                })
                .rows
                .push_row_from(table, row);
        }

        Ok(Self {
            column: column.to_string(),
            groups,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Number of distinct key values.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn has_group(&self, key: &Scalar) -> bool {
        self.group(key).is_some()
    }

    /// Sub-table of all rows whose key equals `key`; `None` is the normal
    /// no-match outcome.
    pub fn group(&self, key: &Scalar) -> Option<&Table> {
        self.groups
            .get(&key_digest(key))
            .filter(|g| &g.key == key)
            .map(|g| &g.rows)
    }
}
