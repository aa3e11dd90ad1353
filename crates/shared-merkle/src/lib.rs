//! # Shared Merkle
//!
//! Binary Merkle tree over an ordered sequence of byte strings, with
//! per-element inclusion proofs.
//!
//! ## Layout
//!
//! The tree follows the RFC 6962 shape, so roots are reproducible by any
//! implementation of the same rules:
//!
//! ```text
//! empty list     → SHA-256("")
//! leaf           → SHA-256(0x00 || leaf)
//! inner node     → SHA-256(0x01 || left || right)
//! n > 1 items    → split at k = largest power of two < n
//!                  left = items[0..k], right = items[k..n]
//! ```
//!
//! No padding is applied; unbalanced trees lean left.
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Domain separation | Leaf and inner hashes use distinct prefixes |
//! | Proof validity | Every generated proof verifies against its root |
//! | Positional binding | A proof only verifies at the index it was issued for |
//! | Bounded proofs | Paths longer than `MAX_PROOF_DEPTH` are rejected |

pub mod hashing;
pub mod proof;
pub mod tree;

pub use hashing::{empty_hash, inner_hash, leaf_hash, LEAF_DOMAIN, NODE_DOMAIN};
pub use proof::{MerkleProof, ProofNode, SiblingPosition, MAX_PROOF_DEPTH};
pub use tree::{hash_from_byte_slices, proofs_from_byte_slices, MerkleTree};
