#![forbid(unsafe_code)]
//! reljoin-join: interchangeable join strategies over the table collaborator.
//!
//! Design intent:
//! - Three strategies (nested-loop, sort-merge, hash) that agree on results
//!   for any single-column equi-join. Nested-loop alone accepts arbitrary
//!   predicates and is the correctness baseline.
//! - Strategies are synchronous and single-threaded; the one sanctioned
//!   parallelism is the config-gated data-parallel pre-sort inside sort-merge.
//! - Output rows flow through one shared assembly path: unified left-then-right
//!   schema, cursor-based cell reads, sequential row keys.

pub mod assemble;
pub mod error;
pub mod hash;
pub mod nested_loop;
pub mod sort_merge;
pub mod strategy;
pub mod verify;

pub use assemble::{unified_schema, RowKeyGen};
pub use error::{JoinError, Side};
pub use hash::hash_join;
pub use nested_loop::nested_loop_join;
pub use sort_merge::{sort_merge_join, sort_merge_join_with};
pub use strategy::{equi_join, JoinStrategy};
pub use verify::{assert_data_equals, data_equals};
