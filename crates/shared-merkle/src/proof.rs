//! # Inclusion Proofs
//!
//! A `MerkleProof` carries the sibling hashes from one leaf up to the root,
//! together with the leaf's index and the size of the committed list. The
//! sibling positions are fully determined by `(index, total)`; verification
//! recomputes them and refuses proofs whose path disagrees, so a proof
//! cannot be replayed at a different index.

use serde::{Deserialize, Serialize};
use shared_types::Hash;

use crate::hashing::{inner_hash, leaf_hash, split_point};

/// Maximum accepted path length.
///
/// A balanced tree of depth 100 would hold 2^100 leaves, so anything longer
/// is malformed.
pub const MAX_PROOF_DEPTH: usize = 100;

/// Proof that one byte string is the `index`-th of `total` committed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Number of items in the committed list.
    pub total: usize,
    /// Position of the proven item.
    pub index: usize,
    /// `leaf_hash` of the proven item.
    pub leaf_hash: Hash,
    /// Sibling hashes, ordered from the leaf towards the root.
    pub path: Vec<ProofNode>,
}

/// A single node in the proof path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    /// The sibling hash at this level.
    pub hash: Hash,
    /// Position of the sibling relative to the running hash.
    pub position: SiblingPosition,
}

/// Position of a sibling in the Merkle tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiblingPosition {
    Left,
    Right,
}

impl MerkleProof {
    /// Check that `leaf` is committed under `root` at this proof's index.
    pub fn verify(&self, root: &Hash, leaf: &[u8]) -> bool {
        if leaf_hash(leaf) != self.leaf_hash {
            return false;
        }
        self.compute_root().is_some_and(|computed| computed == *root)
    }

    /// Fold the path over `leaf_hash`.
    ///
    /// Returns `None` when the proof is structurally malformed: empty list,
    /// index out of range, path too long, or sibling positions that do not
    /// match the shape of a tree with `total` leaves.
    pub fn compute_root(&self) -> Option<Hash> {
        if self.path.len() > MAX_PROOF_DEPTH {
            return None;
        }
        let expected = sibling_positions(self.index, self.total)?;
        if expected.len() != self.path.len() {
            return None;
        }

        let mut current = self.leaf_hash;
        for (node, position) in self.path.iter().zip(expected) {
            if node.position != position {
                return None;
            }
            current = match node.position {
                SiblingPosition::Left => inner_hash(&node.hash, &current),
                SiblingPosition::Right => inner_hash(&current, &node.hash),
            };
        }
        Some(current)
    }
}

/// Sibling positions, leaf to root, for item `index` of a `total`-leaf tree.
///
/// `None` if `index >= total`.
pub(crate) fn sibling_positions(index: usize, total: usize) -> Option<Vec<SiblingPosition>> {
    if index >= total {
        return None;
    }
    let mut reversed = Vec::new();
    let (mut index, mut total) = (index, total);
    while total > 1 {
        let k = split_point(total);
        if index < k {
            reversed.push(SiblingPosition::Right);
            total = k;
        } else {
            reversed.push(SiblingPosition::Left);
            index -= k;
            total -= k;
        }
    }
    reversed.reverse();
    Some(reversed)
}
