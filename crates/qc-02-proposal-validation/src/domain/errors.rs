//! # Domain Errors
//!
//! Every rejection of an edit set is a normal, deterministic outcome: the
//! engine discards the proposal and falls back to the unmodified one. None
//! of these errors is retryable and none is fatal.

use shared_types::{short_hex, Hash, TxAction};
use thiserror::Error;

/// Result type alias for proposal validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons an application's edit set is rejected.
///
/// `index` is the position of the offending record in `tx_records`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Record carries the UNKNOWN action (or an unrecognized wire value).
    #[error("Invalid action UNKNOWN at record {index}")]
    InvalidAction { index: usize },

    /// ADDED claimed for a transaction that was already in the original list.
    #[error("Transaction {} at record {} was already present but marked ADDED", short_hex(.tx_hash), .index)]
    IllegalAdd { index: usize, tx_hash: Hash },

    /// UNMODIFIED or REMOVED claimed for a transaction never handed out.
    #[error("Transaction {} at record {} marked {} was not in the original list", short_hex(.tx_hash), .index, .action)]
    UnknownTransaction {
        index: usize,
        action: TxAction,
        tx_hash: Hash,
    },

    /// Same bytes retained (UNMODIFIED or ADDED) twice.
    #[error("Duplicate transaction {} at record {}", short_hex(.tx_hash), .index)]
    DuplicateTransaction { index: usize, tx_hash: Hash },

    /// Retained transactions exceed the byte budget.
    #[error("Proposal size {total} exceeds maximum {max} bytes")]
    ExceedsMaxSize { total: u64, max: u64 },
}

/// Fieldless discriminant of `ValidationError`, for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidAction,
    IllegalAdd,
    UnknownTransaction,
    DuplicateTransaction,
    ExceedsMaxSize,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidAction { .. } => ValidationErrorKind::InvalidAction,
            Self::IllegalAdd { .. } => ValidationErrorKind::IllegalAdd,
            Self::UnknownTransaction { .. } => ValidationErrorKind::UnknownTransaction,
            Self::DuplicateTransaction { .. } => ValidationErrorKind::DuplicateTransaction,
            Self::ExceedsMaxSize { .. } => ValidationErrorKind::ExceedsMaxSize,
        }
    }

    /// Index of the offending record, if the error is tied to one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::InvalidAction { index }
            | Self::IllegalAdd { index, .. }
            | Self::UnknownTransaction { index, .. }
            | Self::DuplicateTransaction { index, .. } => Some(*index),
            Self::ExceedsMaxSize { .. } => None,
        }
    }
}
