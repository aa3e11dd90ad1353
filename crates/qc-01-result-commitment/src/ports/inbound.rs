//! # Inbound Ports (Driving Ports)
//!
//! Public API the consensus engine calls after the application has executed
//! a block.

use crate::domain::{Result, ResultsCommitment};
use shared_merkle::MerkleProof;
use shared_types::{ExecTxResult, Hash};

/// Primary API for the Result Commitment subsystem.
pub trait ResultCommitmentApi {
    /// Commit to an ordered list of execution results.
    ///
    /// ## Returns
    ///
    /// - `Ok(ResultsCommitment)`: root plus one proof per result
    /// - `Err(Encoding)`: a result exceeded the encoding bound
    fn commit(&self, results: &[ExecTxResult]) -> Result<ResultsCommitment>;

    /// Root only, as carried in the block header.
    fn tx_results_hash(&self, results: &[ExecTxResult]) -> Result<Hash>;

    /// Verify canonical bytes against a root.
    fn verify(&self, root: &Hash, proof: &MerkleProof, canonical: &[u8]) -> bool;

    /// Canonicalize a result and verify it against a root.
    fn verify_result(&self, root: &Hash, proof: &MerkleProof, result: &ExecTxResult) -> bool;
}
