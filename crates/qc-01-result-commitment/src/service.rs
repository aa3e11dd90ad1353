//! # Result Commitment Service
//!
//! Application service layer that implements the `ResultCommitmentApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Validates `CommitmentConfig` once at construction
//! - Implements the inbound port (`ResultCommitmentApi`)
//! - Delegates all hashing and encoding to the domain layer
//! - Emits tracing events; the domain layer stays silent

use shared_merkle::MerkleProof;
use shared_types::{ExecTxResult, Hash};
use tracing::{debug, error};

use crate::config::CommitmentConfig;
use crate::domain::{verify, Result, ResultCommitter, ResultsCommitment};
use crate::ports::inbound::ResultCommitmentApi;

/// Result Commitment Service.
///
/// Holds only immutable configuration, so one instance can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct ResultCommitmentService {
    committer: ResultCommitter,
}

impl ResultCommitmentService {
    /// Create a service from a validated configuration.
    pub fn new(config: CommitmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            committer: ResultCommitter::new(config.max_result_bytes),
        })
    }

    /// Create a service with the default configuration.
    pub fn with_defaults() -> Self {
        let config = CommitmentConfig::default();
        Self {
            committer: ResultCommitter::new(config.max_result_bytes),
        }
    }

    pub fn committer(&self) -> &ResultCommitter {
        &self.committer
    }
}

impl Default for ResultCommitmentService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ResultCommitmentApi for ResultCommitmentService {
    fn commit(&self, results: &[ExecTxResult]) -> Result<ResultsCommitment> {
        match self.committer.commit(results) {
            Ok(commitment) => {
                debug!(
                    results = results.len(),
                    root = %hex::encode(&commitment.root()[..8]),
                    "Committed execution results"
                );
                Ok(commitment)
            }
            Err(e) => {
                error!(error = %e, results = results.len(), "Failed to commit execution results");
                Err(e)
            }
        }
    }

    fn tx_results_hash(&self, results: &[ExecTxResult]) -> Result<Hash> {
        self.committer.tx_results_hash(results).inspect_err(|e| {
            error!(error = %e, results = results.len(), "Failed to hash execution results");
        })
    }

    fn verify(&self, root: &Hash, proof: &MerkleProof, canonical: &[u8]) -> bool {
        verify(root, proof, canonical)
    }

    fn verify_result(&self, root: &Hash, proof: &MerkleProof, result: &ExecTxResult) -> bool {
        let valid = self.committer.verify_result(root, proof, result);
        if !valid {
            debug!(
                index = proof.index,
                total = proof.total,
                "Execution result not included under root"
            );
        }
        valid
    }
}
