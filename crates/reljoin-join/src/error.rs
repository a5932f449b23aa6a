use std::fmt;

use thiserror::Error;

use reljoin_table::TableError;

/// Which join input an error refers to. For hash joins the probe side is
/// reported as `Left` (it owns the left half of the output schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("join column '{column}' not found in {side} input")]
    ColumnNotFound { column: String, side: Side },

    #[error("null join key in {side} input at sorted row {row}")]
    NullJoinKey { side: Side, row: usize },

    #[error("join keys are not mutually comparable: {left} vs {right}")]
    IncomparableKeys { left: String, right: String },

    // u64 row keys cap a single join result at 2^64 rows.
    #[error("output row key space exhausted")]
    KeyOverflow,

    #[error("internal invariant failed: {0}")]
    Invariant(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
