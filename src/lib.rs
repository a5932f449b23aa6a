#![forbid(unsafe_code)]
//! Umbrella crate: re-exports the reljoin workspace surface for the
//! integration tests and benches.

pub use reljoin_core::prelude::*;
pub use reljoin_join::{
    assert_data_equals, data_equals, equi_join, hash_join, nested_loop_join, sort_merge_join,
    sort_merge_join_with, unified_schema, JoinError, JoinStrategy, RowKeyGen, Side,
};
pub use reljoin_table::{Cursor, RowView, Table, TableError, TableGrouping};
