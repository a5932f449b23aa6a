//! Strongly-typed identifiers used across the engine.
//!
//! Downstream crates (table, join) should *not* use raw integers for row
//! identity.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! new_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(v: u64) -> Self {
                Self(v)
            }
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

// Output rows are keyed by a plain u64 counter. The join crate owns the
// sequential generator and its overflow check; 2^64 rows is the ceiling.
new_id!(RowKey);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_key_display_and_order() {
        assert_eq!(RowKey::new(7).to_string(), "RowKey(7)");
        assert!(RowKey::new(1) < RowKey::new(2));
    }
}
