//! Output-side plumbing shared by every strategy: schema unification, row
//! assembly, and sequential row key generation.

use reljoin_core::prelude::{RowKey, Scalar, Schema};
use reljoin_table::{Cursor, Table};

use crate::error::JoinError;

/// Concatenated output schema: left columns in original order, then right
/// columns in original order.
///
/// Colliding names are kept on both halves (col_count is always
/// left + right); during assembly left membership is tested first, so a
/// colliding right-side column also carries the left value.
pub fn unified_schema(left: &Table, right: &Table) -> Schema {
    let mut fields = Vec::with_capacity(left.col_count() + right.col_count());
    fields.extend(left.columns().iter().cloned());
    for field in right.columns() {
        #[cfg(feature = "tracing")]
        if left.contains(&field.name) {
            tracing::warn!(column = %field.name, "column name collision; left value wins");
        }
        fields.push(field.clone());
    }
    Schema::new(fields)
}

/// Fresh empty output table carrying the unified schema.
pub(crate) fn new_output(left: &Table, right: &Table) -> Result<Table, JoinError> {
    let mut out = Table::empty();
    for field in unified_schema(left, right).fields {
        out.add_column(field.name, field.data_type)?;
    }
    Ok(out)
}

/// Sequential output row keys, starting at zero in emission order.
///
/// The keys carry no relationship to either input's row identities; they only
/// give the output a unique, stably ordered identity space.
#[derive(Debug)]
pub struct RowKeyGen {
    next: Option<u64>,
}

impl Default for RowKeyGen {
    fn default() -> Self {
        Self::new()
    }
}

impl RowKeyGen {
    pub fn new() -> Self {
        Self { next: Some(0) }
    }

    pub fn next_key(&mut self) -> Result<RowKey, JoinError> {
        let n = self.next.ok_or(JoinError::KeyOverflow)?;
        self.next = n.checked_add(1);
        Ok(RowKey::new(n))
    }

    #[cfg(test)]
    fn starting_at(n: u64) -> Self {
        Self { next: Some(n) }
    }
}

/// Append one joined row assembled from two positioned cursors.
///
/// Each output column reads from the left cursor when the left schema
/// contains it, else from the right cursor. A column belonging to neither
/// schema can only mean the unified schema and the inputs disagree.
pub(crate) fn append_joined_row(
    out: &mut Table,
    keygen: &mut RowKeyGen,
    left: &mut Cursor<'_>,
    right: &mut Cursor<'_>,
) -> Result<(), JoinError> {
    let key = keygen.next_key()?;
    out.append_row(key, |field| -> Result<Scalar, JoinError> {
        if left.table().contains(&field.name) {
            Ok(left.move_to_column(&field.name)?.value()?.clone())
        } else if right.table().contains(&field.name) {
            Ok(right.move_to_column(&field.name)?.value()?.clone())
        } else {
            Err(JoinError::Invariant(format!(
                "output column '{}' belongs to neither input schema",
                field.name
            )))
        }
    })
}
