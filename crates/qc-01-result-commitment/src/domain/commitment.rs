//! # Results Commitment
//!
//! Merkle commitment over the canonical encodings of an ordered list of
//! execution results. The order of `results` fixes each leaf's index and
//! therefore each proof path.

use shared_merkle::{hash_from_byte_slices, proofs_from_byte_slices, MerkleProof};
use shared_types::{ExecTxResult, Hash, MAX_BLOCK_SIZE_BYTES};

use super::canonical::canonicalize_at;
use super::errors::Result;

/// Root hash and per-result inclusion proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsCommitment {
    root: Hash,
    proofs: Vec<MerkleProof>,
    /// Committer that produced the leaves; results are re-checked under it.
    committer: ResultCommitter,
}

impl ResultsCommitment {
    /// Merkle root over the canonical encodings.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Proof for the result at `index`.
    pub fn proof(&self, index: usize) -> Option<&MerkleProof> {
        self.proofs.get(index)
    }

    pub fn proofs(&self) -> &[MerkleProof] {
        &self.proofs
    }

    /// Number of committed results.
    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    pub fn into_parts(self) -> (Hash, Vec<MerkleProof>) {
        (self.root, self.proofs)
    }

    /// Encoding bound the leaves were produced under.
    pub fn max_result_bytes(&self) -> u64 {
        self.committer.max_result_bytes()
    }

    /// Check `result` against this commitment at position `index`, under
    /// the same encoding bound the commitment was built with.
    ///
    /// False for an index with no proof.
    pub fn verify(&self, index: usize, result: &ExecTxResult) -> bool {
        self.proof(index)
            .is_some_and(|proof| self.committer.verify_result(&self.root, proof, result))
    }
}

/// Commits to execution results under a fixed encoding size bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCommitter {
    max_result_bytes: u64,
}

impl Default for ResultCommitter {
    fn default() -> Self {
        Self::new(MAX_BLOCK_SIZE_BYTES)
    }
}

impl ResultCommitter {
    pub fn new(max_result_bytes: u64) -> Self {
        Self { max_result_bytes }
    }

    pub fn max_result_bytes(&self) -> u64 {
        self.max_result_bytes
    }

    /// Canonical bytes of a single result.
    pub fn canonicalize(&self, result: &ExecTxResult) -> Result<Vec<u8>> {
        canonicalize_at(result, 0, self.max_result_bytes)
    }

    /// Canonical bytes of every result, in order.
    ///
    /// Fails on the first result that cannot be encoded.
    pub fn results_to_byte_slices(&self, results: &[ExecTxResult]) -> Result<Vec<Vec<u8>>> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| canonicalize_at(result, index, self.max_result_bytes))
            .collect()
    }

    /// Commit to `results`.
    ///
    /// For every `i`, `proofs[i]` verifies `canonicalize(results[i])`
    /// against the returned root. Results that differ only in diagnostic
    /// fields produce the same root.
    pub fn commit(&self, results: &[ExecTxResult]) -> Result<ResultsCommitment> {
        let leaves = self.results_to_byte_slices(results)?;
        let (root, proofs) = proofs_from_byte_slices(&leaves);
        Ok(ResultsCommitment {
            root,
            proofs,
            committer: *self,
        })
    }

    /// Root only, as carried in block headers.
    pub fn tx_results_hash(&self, results: &[ExecTxResult]) -> Result<Hash> {
        let leaves = self.results_to_byte_slices(results)?;
        Ok(hash_from_byte_slices(&leaves))
    }

    /// Canonicalize `result` and check it against `root` with `proof`.
    ///
    /// A result that cannot be encoded does not verify.
    pub fn verify_result(&self, root: &Hash, proof: &MerkleProof, result: &ExecTxResult) -> bool {
        self.canonicalize(result)
            .map(|bytes| verify(root, proof, &bytes))
            .unwrap_or(false)
    }
}

/// Commit to `results` under the protocol-wide size bound.
pub fn commit(results: &[ExecTxResult]) -> Result<ResultsCommitment> {
    ResultCommitter::default().commit(results)
}

/// Check that `canonical` is committed under `root` at `proof`'s index.
///
/// `canonical` must come from `canonicalize`; raw results should go
/// through `ResultCommitter::verify_result` instead.
pub fn verify(root: &Hash, proof: &MerkleProof, canonical: &[u8]) -> bool {
    proof.verify(root, canonical)
}
