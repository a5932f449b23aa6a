//! Convenient re-exports for downstream crates.

pub use crate::config::EngineConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::{key_digest, Hash256};
pub use crate::id::RowKey;
pub use crate::schema::{DataType, Field, Schema};
pub use crate::value::{tuple_cmp, Scalar};
