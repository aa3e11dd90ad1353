//! Error types for result commitment

use thiserror::Error;

/// Result type alias for result commitment operations
pub type Result<T> = std::result::Result<T, CommitmentError>;

/// Errors that can occur while committing to execution results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// A result could not be canonicalized.
    ///
    /// `index` is the position of the result in the committed list (0 when
    /// a single result is canonicalized on its own).
    #[error("Cannot canonicalize execution result {index}: {reason}")]
    Encoding {
        /// Position of the offending result
        index: usize,
        /// Encoder message
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CommitmentError {
    /// Well-formed results always encode, so an encoding failure points at a
    /// bug upstream. Engines may abandon the round on critical errors.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }
}
