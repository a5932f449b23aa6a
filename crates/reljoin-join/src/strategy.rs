//! Caller-facing strategy selection for single-column equi-joins.
//!
//! Cost-based auto-selection is out of scope; callers pick. Sort-merge and
//! hash apply only to equality conditions on one column, nested-loop accepts
//! anything.

use serde::{Deserialize, Serialize};

use reljoin_table::Table;

use crate::error::{JoinError, Side};
use crate::hash::hash_join;
use crate::nested_loop::nested_loop_join;
use crate::sort_merge::sort_merge_join;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinStrategy {
    NestedLoop,
    SortMerge,
    Hash,
}

/// Inner equi-join of `left` and `right` on `column` using the chosen
/// strategy. All strategies produce the same multiset of rows over the same
/// left-then-right schema; only emission order differs.
pub fn equi_join(
    left: &Table,
    right: &Table,
    column: &str,
    strategy: JoinStrategy,
) -> Result<Table, JoinError> {
    if !left.contains(column) {
        return Err(JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Left,
        });
    }
    if !right.contains(column) {
        return Err(JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Right,
        });
    }

    match strategy {
        JoinStrategy::NestedLoop => {
            nested_loop_join(left, right, |l, r| l.get(column) == r.get(column))
        }
        JoinStrategy::SortMerge => sort_merge_join(left, right, column),
        JoinStrategy::Hash => hash_join(left, right, column),
    }
}
