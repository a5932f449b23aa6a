//! Nested-loop join: exhaustive pairwise predicate evaluation.
//!
//! The fallback strategy and correctness baseline. It assumes nothing about
//! sortedness or hashability of the inputs, which makes it the only strategy
//! that accepts a non-equality predicate.

use reljoin_table::{RowView, Table};

use crate::assemble::{append_joined_row, new_output, RowKeyGen};
use crate::error::JoinError;

/// Inner join on an arbitrary predicate over two row snapshots.
///
/// Emission order is left-major, right-minor: the canonical reference order
/// for cross-strategy comparison. Costs O(left × right) predicate calls.
pub fn nested_loop_join<P>(left: &Table, right: &Table, predicate: P) -> Result<Table, JoinError>
where
    P: Fn(&RowView<'_>, &RowView<'_>) -> bool,
{
    let mut out = new_output(left, right)?;
    let mut keygen = RowKeyGen::new();

    let mut lcur = left.cursor();
    let mut rcur = right.cursor();

    for li in 0..left.row_count() {
        let lrow = left.row(li)?;
        for ri in 0..right.row_count() {
            let rrow = right.row(ri)?;
            if predicate(&lrow, &rrow) {
                lcur.move_to_row(li)?;
                rcur.move_to_row(ri)?;
                append_joined_row(&mut out, &mut keygen, &mut lcur, &mut rcur)?;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        left_rows = left.row_count(),
        right_rows = right.row_count(),
        emitted = out.row_count(),
        "nested-loop join done"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reljoin_core::prelude::{DataType, RowKey, Scalar};
    use reljoin_table::TableError;

    fn keyed(name: &str, values: &[i64]) -> Table {
        let mut t = Table::empty();
        t.add_column(name, DataType::Int64).unwrap();
        for (i, v) in values.iter().enumerate() {
            t.append_row::<TableError, _>(RowKey::new(i as u64), |_| Ok(Scalar::I64(*v)))
                .unwrap();
        }
        t
    }

    #[test]
    fn non_equality_predicate_is_supported() {
        let left = keyed("a", &[1, 2, 3]);
        let right = keyed("b", &[2, 3]);
        let out = nested_loop_join(&left, &right, |l, r| {
            match (l.get("a"), r.get("b")) {
                (Some(Scalar::I64(a)), Some(Scalar::I64(b))) => a < b,
                _ => false,
            }
        })
        .unwrap();
        // pairs: (1,2) (1,3) (2,3)
        assert_eq!(out.row_count(), 3);
        assert_eq!(out.col_count(), 2);
    }

    #[test]
    fn emission_is_left_major() {
        let left = keyed("a", &[1, 1]);
        let right = keyed("b", &[1, 1]);
        let out = nested_loop_join(&left, &right, |_, _| true).unwrap();
        assert_eq!(out.row_count(), 4);
        // row keys are sequential in emission order
        for r in 0..4 {
            assert_eq!(out.key(r), Some(RowKey::new(r as u64)));
        }
    }
}
