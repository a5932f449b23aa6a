use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),

    // Join keys must be non-null at comparison time; the join crate adds
    // row/side context when it surfaces this.
    #[error("Null value in ordered comparison")]
    NullComparison,

    #[error("Incomparable values: {left} vs {right}")]
    Incomparable { left: String, right: String },

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}
