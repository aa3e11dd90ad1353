//! # Merkle Tree
//!
//! Construction of roots and inclusion proofs over an ordered list of byte
//! strings. Only leaf hashes are stored; inner nodes are recomputed on
//! demand by recursive splitting.

use shared_types::Hash;

use crate::hashing::{empty_hash, inner_hash, leaf_hash, split_point};
use crate::proof::{MerkleProof, ProofNode, SiblingPosition};

/// Compute the root over `items` without producing proofs.
pub fn hash_from_byte_slices<T: AsRef<[u8]>>(items: &[T]) -> Hash {
    MerkleTree::build(items).root()
}

/// Compute the root over `items` and one proof per item, in item order.
///
/// An empty input yields `(empty_hash(), vec![])`.
pub fn proofs_from_byte_slices<T: AsRef<[u8]>>(items: &[T]) -> (Hash, Vec<MerkleProof>) {
    let tree = MerkleTree::build(items);
    let proofs = tree.proofs();
    (tree.root(), proofs)
}

/// A binary Merkle tree built from an ordered list of byte strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// `leaf_hash` of every item, in item order.
    leaves: Vec<Hash>,
    /// The computed root hash.
    root: Hash,
}

impl MerkleTree {
    /// Build a tree over `items`.
    ///
    /// Same input always produces the same root.
    pub fn build<T: AsRef<[u8]>>(items: &[T]) -> Self {
        let leaves: Vec<Hash> = items.iter().map(|item| leaf_hash(item.as_ref())).collect();
        let root = if leaves.is_empty() {
            empty_hash()
        } else {
            subtree_root(&leaves)
        };
        Self { leaves, root }
    }

    pub fn root(&self) -> Hash {
        self.root
    }

    /// Number of committed items.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Proof for the item at `index`, or `None` if out of range.
    pub fn proof(&self, index: usize) -> Option<MerkleProof> {
        let leaf_hash = *self.leaves.get(index)?;
        let mut path = Vec::new();
        single_path(&self.leaves, index, &mut path);
        Some(MerkleProof {
            total: self.leaves.len(),
            index,
            leaf_hash,
            path,
        })
    }

    /// Proofs for every item, in item order.
    pub fn proofs(&self) -> Vec<MerkleProof> {
        if self.leaves.is_empty() {
            return Vec::new();
        }
        let (_, paths) = all_paths(&self.leaves);
        let total = self.leaves.len();
        paths
            .into_iter()
            .zip(&self.leaves)
            .enumerate()
            .map(|(index, (path, leaf_hash))| MerkleProof {
                total,
                index,
                leaf_hash: *leaf_hash,
                path,
            })
            .collect()
    }
}

/// Root of a non-empty run of leaf hashes.
fn subtree_root(leaves: &[Hash]) -> Hash {
    match leaves {
        [single] => *single,
        _ => {
            let k = split_point(leaves.len());
            inner_hash(&subtree_root(&leaves[..k]), &subtree_root(&leaves[k..]))
        }
    }
}

/// Path for one leaf, appended leaf to root.
fn single_path(leaves: &[Hash], index: usize, path: &mut Vec<ProofNode>) {
    if leaves.len() <= 1 {
        return;
    }
    let k = split_point(leaves.len());
    if index < k {
        single_path(&leaves[..k], index, path);
        path.push(ProofNode {
            hash: subtree_root(&leaves[k..]),
            position: SiblingPosition::Right,
        });
    } else {
        single_path(&leaves[k..], index - k, path);
        path.push(ProofNode {
            hash: subtree_root(&leaves[..k]),
            position: SiblingPosition::Left,
        });
    }
}

/// Root and paths for every leaf of a non-empty run, in one pass.
fn all_paths(leaves: &[Hash]) -> (Hash, Vec<Vec<ProofNode>>) {
    if let [single] = leaves {
        return (*single, vec![Vec::new()]);
    }
    let k = split_point(leaves.len());
    let (left_root, mut left_paths) = all_paths(&leaves[..k]);
    let (right_root, mut right_paths) = all_paths(&leaves[k..]);

    for path in &mut left_paths {
        path.push(ProofNode {
            hash: right_root,
            position: SiblingPosition::Right,
        });
    }
    for path in &mut right_paths {
        path.push(ProofNode {
            hash: left_root,
            position: SiblingPosition::Left,
        });
    }
    left_paths.append(&mut right_paths);

    (inner_hash(&left_root, &right_root), left_paths)
}
