//! Sort-merge equi-join on one column, group-aware variant.
//!
//! Both inputs are copied and stably sorted ascending on the join column
//! (originals untouched), then merged with two cursors. Duplicate-key groups
//! need care: when the left side repeats a key, the right-side group is
//! replayed from its recorded start so every left row pairs with every right
//! row of the group. Without that rewind, repeated left keys would each see
//! only a tail of the matching right group.

use std::cmp::Ordering;

use reljoin_core::error::Error as CoreError;
use reljoin_core::prelude::{EngineConfig, Scalar};
use reljoin_table::Table;

use crate::assemble::{append_joined_row, new_output, RowKeyGen};
use crate::error::{JoinError, Side};

/// Equi-join with a sequential pre-sort. See [`sort_merge_join_with`].
pub fn sort_merge_join(left: &Table, right: &Table, column: &str) -> Result<Table, JoinError> {
    sort_merge_join_with(&EngineConfig::default(), left, right, column)
}

/// Equi-join on `column`, which must hold non-null, mutually comparable
/// values on both sides; a null or incomparable key at comparison time is a
/// fatal precondition violation. The config may parallelize the pre-sort;
/// the merge itself is always sequential.
pub fn sort_merge_join_with(
    config: &EngineConfig,
    left: &Table,
    right: &Table,
    column: &str,
) -> Result<Table, JoinError> {
    let lcol = left
        .schema()
        .index_of(column)
        .ok_or_else(|| JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Left,
        })?;
    let rcol = right
        .schema()
        .index_of(column)
        .ok_or_else(|| JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Right,
        })?;

    let sorted_left = left.sort_with(config, true, &[column])?;
    let sorted_right = right.sort_with(config, true, &[column])?;

    let mut out = new_output(left, right)?;
    let mut keygen = RowKeyGen::new();

    let lcount = sorted_left.row_count();
    let rcount = sorted_right.row_count();

    let mut li = 0usize;
    let mut ri = 0usize;
    // where the current right-side duplicate-key group began
    let mut r_group_start = 0usize;

    let mut lcur = sorted_left.cursor();
    let mut rcur = sorted_right.cursor();

    let mut data_available = lcount > 0 && rcount > 0;

    while data_available {
        let mut moved = false;

        let lval = key_at(&sorted_left, li, lcol, Side::Left)?;
        let rval = key_at(&sorted_right, ri, rcol, Side::Right)?;

        // equal keys join the rows; otherwise the lagging side advances
        match compare_keys(lval, rval, li, ri)? {
            Ordering::Equal => {
                lcur.move_to_row(li)?;
                rcur.move_to_row(ri)?;
                append_joined_row(&mut out, &mut keygen, &mut lcur, &mut rcur)?;
            }
            Ordering::Less => {
                if li + 1 < lcount {
                    li += 1;
                    moved = true;
                }
            }
            Ordering::Greater => {
                if ri + 1 < rcount {
                    ri += 1;
                    r_group_start = ri;
                    moved = true;
                }
            }
        }

        if !moved {
            // lookahead: still inside the same key group on the right side?
            // then advance only the right cursor and keep the left row
            if ri + 1 < rcount {
                let next_rval = key_at(&sorted_right, ri + 1, rcol, Side::Right)?;
                if rval == next_rval {
                    ri += 1;
                    moved = true;
                }
            }
        }

        if !moved && li + 1 < lcount {
            let next_lval = key_at(&sorted_left, li + 1, lcol, Side::Left)?;
            if lval == next_lval {
                // left side continues the key group: replay the right-side
                // group against the new left row
                li += 1;
                ri = r_group_start;
            } else {
                // neither side continues its group; move both ahead
                li += 1;
                if ri + 1 < rcount {
                    ri += 1;
                    r_group_start = ri;
                }
            }
            moved = true;
        }

        data_available = moved;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        column,
        left_rows = lcount,
        right_rows = rcount,
        emitted = out.row_count(),
        "sort-merge join done"
    );

    Ok(out)
}

fn key_at<'a>(table: &'a Table, row: usize, col: usize, side: Side) -> Result<&'a Scalar, JoinError> {
    table
        .value(row, col)
        .ok_or_else(|| JoinError::Invariant(format!("missing join key cell at {side} row {row}")))
}

fn compare_keys(l: &Scalar, r: &Scalar, li: usize, ri: usize) -> Result<Ordering, JoinError> {
    if l.is_null() {
        return Err(JoinError::NullJoinKey {
            side: Side::Left,
            row: li,
        });
    }
    if r.is_null() {
        return Err(JoinError::NullJoinKey {
            side: Side::Right,
            row: ri,
        });
    }
    l.try_cmp(r).map_err(|e| match e {
        CoreError::Incomparable { left, right } => JoinError::IncomparableKeys { left, right },
        other => JoinError::Invariant(other.to_string()),
    })
}
