//! Configuration types for result commitment

use serde::{Deserialize, Serialize};
use shared_types::MAX_BLOCK_SIZE_BYTES;

use crate::domain::{CommitmentError, Result};

/// Runtime configuration for result commitment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitmentConfig {
    /// Upper bound on the canonical encoding of a single result, in bytes.
    pub max_result_bytes: u64,
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        Self {
            max_result_bytes: MAX_BLOCK_SIZE_BYTES,
        }
    }
}

impl CommitmentConfig {
    /// Reject configurations no result could ever be encoded under.
    pub fn validate(&self) -> Result<()> {
        if self.max_result_bytes == 0 {
            return Err(CommitmentError::InvalidConfig(
                "max_result_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
