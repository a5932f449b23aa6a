//! In-memory columnar table with owned buffers.
//!
//! Layout is one `Vec<Scalar>` per declared column plus a parallel vector of
//! row keys. Rows are addressed by index; nothing here hands out aliased
//! mutable state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use reljoin_core::prelude::{tuple_cmp, DataType, EngineConfig, Field, RowKey, Scalar, Schema};

use crate::cursor::Cursor;
use crate::error::TableError;
use crate::group::TableGrouping;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    schema: Schema,
    keys: Vec<RowKey>,
    columns: Vec<Vec<Scalar>>,
}

impl Table {
    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_schema(schema: Schema) -> Self {
        let columns = schema.fields.iter().map(|_| Vec::new()).collect();
        Self {
            schema,
            keys: Vec::new(),
            columns,
        }
    }

    pub fn row_count(&self) -> usize {
        self.keys.len()
    }

    pub fn col_count(&self) -> usize {
        self.schema.len()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Ordered column descriptors.
    pub fn columns(&self) -> &[Field] {
        &self.schema.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schema.contains(name)
    }

    /// Declare a column on a still-empty table.
    ///
    /// Duplicate names are allowed: join outputs concatenate two schemas and
    /// may legitimately carry a colliding name on both halves. Name-based
    /// lookups always resolve to the first match.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
    ) -> Result<(), TableError> {
        let name = name.into();
        if !self.keys.is_empty() {
            return Err(TableError::ColumnAfterRows(name));
        }
        self.schema.fields.push(Field::new(name, data_type));
        self.columns.push(Vec::new());
        Ok(())
    }

    /// Append one row, pulling a value for every declared column in schema
    /// order from `provider`. The provider is invoked exactly once per column;
    /// if any call fails the table is left untouched.
    pub fn append_row<E, F>(&mut self, key: RowKey, mut provider: F) -> Result<(), E>
    where
        E: From<TableError>,
        F: FnMut(&Field) -> Result<Scalar, E>,
    {
        let mut values = Vec::with_capacity(self.schema.len());
        for field in &self.schema.fields {
            values.push(provider(field)?);
        }
        self.keys.push(key);
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.push(value);
        }
        Ok(())
    }

    pub fn key(&self, row: usize) -> Option<RowKey> {
        self.keys.get(row).copied()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// Immutable snapshot of one row, for predicate evaluation.
    pub fn row(&self, row: usize) -> Result<RowView<'_>, TableError> {
        if row >= self.row_count() {
            return Err(TableError::RowOutOfBounds {
                index: row,
                rows: self.row_count(),
            });
        }
        Ok(RowView { table: self, row })
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Copy one existing row of `src` (same schema) onto the end of `self`,
    /// keeping its row key.
    pub(crate) fn push_row_from(&mut self, src: &Table, row: usize) {
        self.keys.push(src.keys[row]);
        for (dst, col) in self.columns.iter_mut().zip(&src.columns) {
            dst.push(col[row].clone());
        }
    }

    /// Stable sort into a new table; the receiver is untouched. Ties keep
    /// their input relative order.
    pub fn sort(&self, ascending: bool, sort_columns: &[&str]) -> Result<Table, TableError> {
        self.sort_with(&EngineConfig::default(), ascending, sort_columns)
    }

    /// Like [`Table::sort`], with the config deciding whether the sort itself
    /// runs data-parallel. Parallelism never leaks past the returned table.
    pub fn sort_with(
        &self,
        config: &EngineConfig,
        ascending: bool,
        sort_columns: &[&str],
    ) -> Result<Table, TableError> {
        let key_indices: Vec<usize> = sort_columns
            .iter()
            .map(|name| {
                self.schema
                    .index_of(name)
                    .ok_or_else(|| TableError::UnknownColumn((*name).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Build (sort_key_tuple, original_index), sort it, then gather.
        let mut perm: Vec<(Vec<Scalar>, usize)> = (0..self.row_count())
            .map(|row| {
                let tuple: Vec<Scalar> = key_indices
                    .iter()
                    .map(|&col| self.columns[col][row].clone())
                    .collect();
                (tuple, row)
            })
            .collect();

        let cmp = move |a: &(Vec<Scalar>, usize), b: &(Vec<Scalar>, usize)| {
            let ord = tuple_cmp(&a.0, &b.0);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        };

        if config.parallel_sort && self.row_count() >= config.parallel_sort_min_rows {
            perm.par_sort_by(cmp);
        } else {
            perm.sort_by(cmp);
        }

        let keys = perm.iter().map(|&(_, row)| self.keys[row]).collect();
        let columns = self
            .columns
            .iter()
            .map(|col| perm.iter().map(|&(_, row)| col[row].clone()).collect())
            .collect();

        Ok(Table {
            schema: self.schema.clone(),
            keys,
            columns,
        })
    }

    /// Partition rows into sub-tables keyed by the distinct values of one
    /// column.
    pub fn group_by(&self, column: &str) -> Result<TableGrouping, TableError> {
        TableGrouping::build(self, column)
    }
}

/// Borrowed view of a single row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> RowView<'a> {
    pub fn key(&self) -> RowKey {
        self.table.keys[self.row]
    }

    pub fn index(&self) -> usize {
        self.row
    }

    /// Value of the first column with this name, if any.
    pub fn get(&self, name: &str) -> Option<&'a Scalar> {
        let col = self.table.schema.index_of(name)?;
        Some(&self.table.columns[col][self.row])
    }

    pub fn get_at(&self, col: usize) -> Option<&'a Scalar> {
        self.table.value(self.row, col)
    }
}
