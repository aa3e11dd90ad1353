//! Configuration types for proposal validation

use serde::{Deserialize, Serialize};
use shared_types::MAX_BLOCK_SIZE_BYTES;

/// Runtime configuration for proposal validation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Byte budget for the transactions a proposal may retain.
    pub max_proposal_bytes: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_proposal_bytes: MAX_BLOCK_SIZE_BYTES,
        }
    }
}
