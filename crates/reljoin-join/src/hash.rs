//! Hash equi-join: build a multi-map on one side, probe with the other.
//!
//! Duplicate keys on either side need no special casing here; the group map
//! fans out naturally. The price is O(build) extra memory for the grouping,
//! which is immutable once built.

use reljoin_table::Table;

use crate::assemble::{append_joined_row, new_output, RowKeyGen};
use crate::error::{JoinError, Side};

/// Equi-join on `column`, building the group map on `build` and scanning
/// `probe`. The probe side owns the left half of the output schema, so for an
/// equi-join the result agrees with `nested_loop_join(probe, build, ..)`.
///
/// A probe key with no group is the normal no-match outcome, not an error.
/// Unlike sort-merge, keys only need equality, not a total order; `Null`
/// probes pair with `Null` build keys.
pub fn hash_join(probe: &Table, build: &Table, column: &str) -> Result<Table, JoinError> {
    let pcol = probe
        .schema()
        .index_of(column)
        .ok_or_else(|| JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Left,
        })?;
    let bcol = build
        .schema()
        .index_of(column)
        .ok_or_else(|| JoinError::ColumnNotFound {
            column: column.to_string(),
            side: Side::Right,
        })?;

    let grouping = build.group_by(column)?;

    let mut out = new_output(probe, build)?;
    let mut keygen = RowKeyGen::new();
    let mut pcur = probe.cursor();

    for pi in 0..probe.row_count() {
        let pval = probe.value(pi, pcol).ok_or_else(|| {
            JoinError::Invariant(format!("missing join key cell at left row {pi}"))
        })?;

        let Some(group) = grouping.group(pval) else {
            continue;
        };

        pcur.move_to_row(pi)?;
        let mut gcur = group.cursor();
        for gi in 0..group.row_count() {
            // re-check key equality; under correct hashing this always holds
            if group.value(gi, bcol) != Some(pval) {
                continue;
            }
            gcur.move_to_row(gi)?;
            append_joined_row(&mut out, &mut keygen, &mut pcur, &mut gcur)?;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        column,
        probe_rows = probe.row_count(),
        build_rows = build.row_count(),
        groups = grouping.len(),
        emitted = out.row_count(),
        "hash join done"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reljoin_core::prelude::{DataType, RowKey, Scalar};
    use reljoin_table::TableError;

    fn keyed(values: &[Scalar]) -> Table {
        let mut t = Table::empty();
        t.add_column("k", DataType::Int64).unwrap();
        for (i, v) in values.iter().enumerate() {
            t.append_row::<TableError, _>(RowKey::new(i as u64), |_| Ok(v.clone()))
                .unwrap();
        }
        t
    }

    fn i64s(values: &[i64]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::I64(*v)).collect()
    }

    #[test]
    fn duplicate_keys_fan_out() {
        let probe = keyed(&i64s(&[1, 1]));
        let build = keyed(&i64s(&[1, 1, 1]));
        let out = hash_join(&probe, &build, "k").unwrap();
        assert_eq!(out.row_count(), 6);
        assert_eq!(out.col_count(), 2);
    }

    #[test]
    fn missing_key_is_empty_emission() {
        let probe = keyed(&i64s(&[9]));
        let build = keyed(&i64s(&[1, 2]));
        let out = hash_join(&probe, &build, "k").unwrap();
        assert_eq!(out.row_count(), 0);
    }

    #[test]
    fn null_pairs_with_null() {
        let probe = keyed(&[Scalar::Null, Scalar::I64(1)]);
        let build = keyed(&[Scalar::Null]);
        let out = hash_join(&probe, &build, "k").unwrap();
        assert_eq!(out.row_count(), 1);
    }

    #[test]
    fn unsorted_inputs_are_fine() {
        let probe = keyed(&i64s(&[3, 1, 2]));
        let build = keyed(&i64s(&[2, 3]));
        let out = hash_join(&probe, &build, "k").unwrap();
        assert_eq!(out.row_count(), 2);
    }
}
