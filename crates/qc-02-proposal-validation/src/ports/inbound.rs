//! # Inbound Ports (Driving Ports)
//!
//! Public API the consensus engine calls once the application has answered
//! a proposal-preparation request.

use crate::domain::Result;
use shared_types::{ProposalEditSet, Tx};

/// Primary API for the Proposal Validation subsystem.
pub trait ProposalValidationApi {
    /// Validate `edits` against `original_txs` under the configured budget.
    ///
    /// `original_txs` must be the verbatim list handed to the application.
    fn validate(&self, original_txs: &[Tx], edits: &ProposalEditSet) -> Result<()>;

    /// Validate under an explicit byte budget.
    fn validate_with_budget(
        &self,
        max_total_bytes: u64,
        original_txs: &[Tx],
        edits: &ProposalEditSet,
    ) -> Result<()>;
}
