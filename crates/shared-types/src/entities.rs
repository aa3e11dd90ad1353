//! # Core Entities
//!
//! Primitive aliases and protocol constants used across subsystems.

use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 hash.
pub type Hash = [u8; 32];

/// Raw transaction bytes as handed to the application.
pub type Tx = Vec<u8>;

/// Hard upper bound on the data carried by one block (100 MiB).
///
/// Used as the default byte budget for proposals and for the canonical
/// encoding of a single execution result.
pub const MAX_BLOCK_SIZE_BYTES: u64 = 104_857_600;

/// Compute the SHA-256 hash identifying a raw transaction.
#[inline]
pub fn tx_hash(tx: &[u8]) -> Hash {
    Sha256::digest(tx).into()
}

/// Short hex prefix of a hash for log and error output.
pub fn short_hex(hash: &Hash) -> String {
    hex::encode(&hash[..4])
}
