//! Hashing rules for leaves and inner nodes.

use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Prefix byte for leaf hashes.
pub const LEAF_DOMAIN: u8 = 0x00;

/// Prefix byte for inner node hashes.
pub const NODE_DOMAIN: u8 = 0x01;

/// Root of an empty tree: SHA-256 of the empty string.
#[inline]
pub fn empty_hash() -> Hash {
    Sha256::digest(b"").into()
}

/// SHA-256(0x00 || leaf)
#[inline]
pub fn leaf_hash(leaf: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_DOMAIN]);
    hasher.update(leaf);
    hasher.finalize().into()
}

/// SHA-256(0x01 || left || right)
#[inline]
pub fn inner_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_DOMAIN]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Largest power of two strictly less than `n`. Requires `n >= 2`.
#[inline]
pub(crate) fn split_point(n: usize) -> usize {
    debug_assert!(n >= 2);
    1usize << (n - 1).ilog2()
}
