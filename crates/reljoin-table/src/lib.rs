#![forbid(unsafe_code)]
//! reljoin-table: the tabular-storage collaborator consumed by the join engine.
//!
//! Design intent:
//! - An in-memory columnar `Table` with a fixed ordered schema, owned buffers,
//!   and index-based traversal. No shared mutable state; cursors borrow the
//!   table and position themselves with plain indices.
//! - `sort` returns a new table and never mutates the receiver. The sort step
//!   is the only place data parallelism is allowed (rayon, config-gated).
//! - `group_by` builds a digest-keyed multi-map from join-key value to the
//!   sub-table of rows sharing it.

pub mod cursor;
pub mod error;
pub mod group;
pub mod table;

pub use cursor::Cursor;
pub use error::TableError;
pub use group::TableGrouping;
pub use table::{RowView, Table};
