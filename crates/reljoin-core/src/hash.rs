//! Stable hashing helpers for join-key grouping.

use blake3::Hasher;

use crate::value::{self, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        // blake3 hex(32b) is 64 hex chars
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

pub fn hash_bytes(bytes: &[u8]) -> Hash256 {
    let mut h = Hasher::new();
    h.update(bytes);
    let out = h.finalize();
    Hash256(out.into())
}

/// Digest of a single scalar, used as the grouping key for hash joins.
///
/// The digest covers the type discriminant and the value's exact bit pattern,
/// so `I64(1)` and `F64(1.0)` land in different groups. Callers that need
/// content equality (not just digest equality) must re-check the scalar.
pub fn key_digest(scalar: &Scalar) -> Hash256 {
    let mut h = Hasher::new();
    value::hash_into(scalar, &mut h);
    Hash256(h.finalize().into())
}
