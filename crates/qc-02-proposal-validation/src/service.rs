//! # Proposal Validation Service
//!
//! Application service layer that implements the `ProposalValidationApi`
//! trait on top of the pure domain validator, adding the configured byte
//! budget and tracing.

use shared_types::{ProposalEditSet, Tx};
use tracing::{debug, warn};

use crate::config::ValidationConfig;
use crate::domain::{retained_bytes, validate, Result};
use crate::ports::inbound::ProposalValidationApi;

/// Proposal Validation Service.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ProposalValidationService {
    config: ValidationConfig,
}

impl ProposalValidationService {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl ProposalValidationApi for ProposalValidationService {
    fn validate(&self, original_txs: &[Tx], edits: &ProposalEditSet) -> Result<()> {
        self.validate_with_budget(self.config.max_proposal_bytes, original_txs, edits)
    }

    fn validate_with_budget(
        &self,
        max_total_bytes: u64,
        original_txs: &[Tx],
        edits: &ProposalEditSet,
    ) -> Result<()> {
        match validate(max_total_bytes, original_txs, edits) {
            Ok(()) => {
                debug!(
                    records = edits.tx_records.len(),
                    original = original_txs.len(),
                    modified = edits.modified_tx,
                    bytes = retained_bytes(edits),
                    "Accepted proposal edit set"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    kind = ?e.kind(),
                    record = ?e.record_index(),
                    records = edits.tx_records.len(),
                    error = %e,
                    "Rejected proposal edit set"
                );
                Err(e)
            }
        }
    }
}
