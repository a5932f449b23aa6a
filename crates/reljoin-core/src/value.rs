//! Lightweight scalar values shared by the table and join crates.
//!
//! These stay Arrow-free so core remains small and stable; richer engines can
//! convert to columnar arrays downstream.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::DataType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
    // TODO: Add Date/Time/Decimal, etc.
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Null => DataType::Utf8, // TODO: carry explicit Null type if needed
            Scalar::Bool(_) => DataType::Boolean,
            Scalar::I32(_) => DataType::Int32,
            Scalar::I64(_) => DataType::Int64,
            Scalar::F32(_) => DataType::Float32,
            Scalar::F64(_) => DataType::Float64,
            Scalar::Str(_) => DataType::Utf8,
            Scalar::Bin(_) => DataType::Binary,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Total order used for sorting.
    ///
    /// Nulls sort first, NaN sorts last within its float type, and values of
    /// different variants fall back to a fixed type rank. Every pair of
    /// scalars is ordered, which is what a stable table sort needs.
    pub fn total_cmp(&self, other: &Scalar) -> Ordering {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Bool(x), Bool(y)) => x.cmp(y),
            (I32(x), I32(y)) => x.cmp(y),
            (I64(x), I64(y)) => x.cmp(y),
            (F32(x), F32(y)) => {
                if x.is_nan() && y.is_nan() {
                    Ordering::Equal
                } else if x.is_nan() {
                    Ordering::Greater
                } else if y.is_nan() {
                    Ordering::Less
                } else {
                    x.partial_cmp(y).unwrap_or(Ordering::Equal)
                }
            }
            (F64(x), F64(y)) => {
                if x.is_nan() && y.is_nan() {
                    Ordering::Equal
                } else if x.is_nan() {
                    Ordering::Greater
                } else if y.is_nan() {
                    Ordering::Less
                } else {
                    x.partial_cmp(y).unwrap_or(Ordering::Equal)
                }
            }
            (Str(x), Str(y)) => x.cmp(y),
            (Bin(x), Bin(y)) => x.cmp(y),
            // Mixed types: order by variant order
            _ => type_rank(self).cmp(&type_rank(other)),
        }
    }

    /// Fallible order for join keys.
    ///
    /// Null operands and mixed-variant pairs are precondition violations, not
    /// values to be ranked. NaN is likewise rejected since it breaks the
    /// mutual-comparability contract.
    pub fn try_cmp(&self, other: &Scalar) -> Result<Ordering> {
        use Scalar::*;

        match (self, other) {
            (Null, _) | (_, Null) => Err(Error::NullComparison),
            (Bool(x), Bool(y)) => Ok(x.cmp(y)),
            (I32(x), I32(y)) => Ok(x.cmp(y)),
            (I64(x), I64(y)) => Ok(x.cmp(y)),
            (F32(x), F32(y)) => x.partial_cmp(y).ok_or_else(|| incomparable(self, other)),
            (F64(x), F64(y)) => x.partial_cmp(y).ok_or_else(|| incomparable(self, other)),
            (Str(x), Str(y)) => Ok(x.cmp(y)),
            (Bin(x), Bin(y)) => Ok(x.as_slice().cmp(y.as_slice())),
            _ => Err(incomparable(self, other)),
        }
    }
}

fn incomparable(a: &Scalar, b: &Scalar) -> Error {
    Error::Incomparable {
        left: format!("{:?}", a.data_type()),
        right: format!("{:?}", b.data_type()),
    }
}

/// Compare two scalar tuples lexicographically for sorting.
pub fn tuple_cmp(a: &[Scalar], b: &[Scalar]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Assign a numeric order to scalar types for mixed-type comparisons.
pub(crate) fn type_rank(s: &Scalar) -> u8 {
    use Scalar::*;
    match s {
        Null => 0,
        Bool(_) => 1,
        I32(_) => 2,
        I64(_) => 3,
        F32(_) => 4,
        F64(_) => 5,
        Str(_) => 6,
        Bin(_) => 7,
    }
}

/// Hash a scalar value into a hasher.
pub(crate) fn hash_into(scalar: &Scalar, hasher: &mut blake3::Hasher) {
    use Scalar::*;

    // Write type discriminant first
    hasher.update(&[type_rank(scalar)]);

    match scalar {
        Null => {}
        Bool(b) => {
            hasher.update(&[*b as u8]);
        }
        I32(i) => {
            hasher.update(&i.to_le_bytes());
        }
        I64(i) => {
            hasher.update(&i.to_le_bytes());
        }
        F32(f) => {
            hasher.update(&f.to_bits().to_le_bytes());
        }
        F64(f) => {
            hasher.update(&f.to_bits().to_le_bytes());
        }
        Str(s) => {
            hasher.update(s.as_bytes());
        }
        Bin(b) => {
            hasher.update(b);
        }
    }
}
