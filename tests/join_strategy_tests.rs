//! Per-strategy behavior of the join engine through the public surface.


use reljoin::{
    equi_join, hash_join, nested_loop_join, sort_merge_join, DataType, JoinStrategy, Scalar,
};
use test_data_gen::{keys, table_of, venues};

fn all_strategies() -> [JoinStrategy; 3] {
    [
        JoinStrategy::NestedLoop,
        JoinStrategy::SortMerge,
        JoinStrategy::Hash,
    ]
}

/// left = [(key=1,id=A),(key=1,id=B)], right = [(key=1,id=X)] joined on `key`
/// must yield exactly (A,X) and (B,X) under every strategy.
#[test]
fn two_left_rows_one_right_row() {
    let left = table_of(
        &[("key", DataType::Int64), ("lid", DataType::Utf8)],
        &[
            vec![Scalar::I64(1), Scalar::Str("A".into())],
            vec![Scalar::I64(1), Scalar::Str("B".into())],
        ],
    );
    let right = table_of(
        &[("key", DataType::Int64), ("rid", DataType::Utf8)],
        &[vec![Scalar::I64(1), Scalar::Str("X".into())]],
    );

    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "key", strategy).unwrap();
        assert_eq!(out.row_count(), 2, "{strategy:?}");
        assert_eq!(out.col_count(), 4, "{strategy:?}");

        let sorted = out.sort(true, &["lid"]).unwrap();
        let lid_col = 1;
        let rid_col = 3;
        assert_eq!(sorted.value(0, lid_col), Some(&Scalar::Str("A".into())));
        assert_eq!(sorted.value(0, rid_col), Some(&Scalar::Str("X".into())));
        assert_eq!(sorted.value(1, lid_col), Some(&Scalar::Str("B".into())));
        assert_eq!(sorted.value(1, rid_col), Some(&Scalar::Str("X".into())));
    }
}

#[test]
fn always_false_predicate_yields_schema_but_no_rows() {
    let left = venues(4);
    let right = keys("k", &[1, 2]);
    let out = nested_loop_join(&left, &right, |_, _| false).unwrap();
    assert_eq!(out.row_count(), 0);
    assert_eq!(out.col_count(), left.col_count() + right.col_count());
    let names: Vec<_> = out.columns().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["venueid", "name", "k"]);
}

/// Every row on both sides shares one key: the result is the full n×m cross
/// product. This is the case that needs sort-merge's group rewind and hash
/// join's multi-map fan-out.
#[test]
fn single_key_cross_product() {
    let n = 7;
    let m = 5;
    let left = keys("k", &vec![42; n]);
    let right = keys("k", &vec![42; m]);

    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "k", strategy).unwrap();
        assert_eq!(out.row_count(), n * m, "{strategy:?}");
    }
}

#[test]
fn output_schema_is_left_then_right_for_all_strategies() {
    let left = venues(3);
    let right = table_of(
        &[("eventid", DataType::Int64), ("venueid", DataType::Int64)],
        &[vec![Scalar::I64(0), Scalar::I64(1)]],
    );

    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "venueid", strategy).unwrap();
        let names: Vec<_> = out.columns().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["venueid", "name", "eventid", "venueid"],
            "{strategy:?}"
        );
        assert_eq!(out.col_count(), left.col_count() + right.col_count());
    }
}

/// Colliding column names: both copies stay in the output and both carry the
/// left side's value.
#[test]
fn name_collision_left_value_wins_on_both_copies() {
    let left = table_of(
        &[("key", DataType::Int64), ("tag", DataType::Utf8)],
        &[vec![Scalar::I64(1), Scalar::Str("left-tag".into())]],
    );
    let right = table_of(
        &[("key", DataType::Int64), ("tag", DataType::Utf8)],
        &[vec![Scalar::I64(1), Scalar::Str("right-tag".into())]],
    );

    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "key", strategy).unwrap();
        assert_eq!(out.row_count(), 1, "{strategy:?}");
        assert_eq!(out.col_count(), 4, "{strategy:?}");
        // columns: key, tag, key, tag; the right-side copies read through
        // the left schema because left membership is tested first
        assert_eq!(out.value(0, 1), Some(&Scalar::Str("left-tag".into())));
        assert_eq!(out.value(0, 3), Some(&Scalar::Str("left-tag".into())));
    }
}

#[test]
fn empty_inputs_yield_empty_output() {
    let left = keys("k", &[]);
    let right = keys("k", &[1, 2, 3]);
    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "k", strategy).unwrap();
        assert_eq!(out.row_count(), 0);
        assert_eq!(out.col_count(), 2);
    }
}

#[test]
fn sort_merge_leaves_inputs_untouched() {
    let left = keys("k", &[3, 1, 2]);
    let right = keys("k", &[2, 3, 1]);
    let _ = sort_merge_join(&left, &right, "k").unwrap();
    assert_eq!(left.value(0, 0), Some(&Scalar::I64(3)));
    assert_eq!(right.value(0, 0), Some(&Scalar::I64(2)));
}

#[test]
fn hash_join_probe_side_owns_left_half() {
    let probe = venues(2);
    let build = table_of(
        &[("eventid", DataType::Int64), ("venueid", DataType::Int64)],
        &[
            vec![Scalar::I64(10), Scalar::I64(0)],
            vec![Scalar::I64(11), Scalar::I64(0)],
        ],
    );
    let out = hash_join(&probe, &build, "venueid").unwrap();
    assert_eq!(out.row_count(), 2);
    let names: Vec<_> = out.columns().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["venueid", "name", "eventid", "venueid"]);
}

#[test]
fn output_keys_are_sequential_from_zero() {
    let left = keys("k", &[1, 1]);
    let right = keys("k", &[1, 1]);
    for strategy in all_strategies() {
        let out = equi_join(&left, &right, "k", strategy).unwrap();
        assert_eq!(out.row_count(), 4);
        let mut seen: Vec<u64> = (0..out.row_count())
            .map(|r| out.key(r).unwrap().get())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3], "{strategy:?}");
        // and they are assigned in emission order
        assert_eq!(out.key(0).unwrap().get(), 0);
    }
}
