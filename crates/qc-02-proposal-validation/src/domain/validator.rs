//! # Edit Set Validator
//!
//! Single-pass check of a `ProposalEditSet` against the transactions the
//! engine handed to the application.
//!
//! ## Rules (per record, in record order)
//!
//! | Action | Rule | Error |
//! |--------|------|-------|
//! | UNKNOWN | always rejected | `InvalidAction` |
//! | ADDED | tx must NOT be in the original list | `IllegalAdd` |
//! | UNMODIFIED / REMOVED | tx MUST be in the original list | `UnknownTransaction` |
//! | UNMODIFIED / ADDED | tx not already retained | `DuplicateTransaction` |
//!
//! After the last record the retained byte total must not exceed the
//! budget (`ExceedsMaxSize`). REMOVED records count toward neither the total
//! nor the duplicate set.
//!
//! The first offending record decides the error.

use std::collections::HashSet;

use shared_types::{tx_hash, ProposalEditSet, TxAction};

use super::errors::{Result, ValidationError};

/// Validate `edits` against `original_txs` under a `max_total_bytes` budget.
///
/// Pure and deterministic: the same inputs always yield the same verdict.
/// Membership and duplicate checks are hash-set lookups on the raw bytes.
pub fn validate<T: AsRef<[u8]>>(
    max_total_bytes: u64,
    original_txs: &[T],
    edits: &ProposalEditSet,
) -> Result<()> {
    let original: HashSet<&[u8]> = original_txs.iter().map(AsRef::as_ref).collect();
    let mut retained: HashSet<&[u8]> = HashSet::with_capacity(edits.tx_records.len());
    let mut total: u64 = 0;

    for (index, record) in edits.tx_records.iter().enumerate() {
        let tx = record.tx.as_slice();
        let in_original = original.contains(tx);

        match record.action {
            TxAction::Unknown => return Err(ValidationError::InvalidAction { index }),
            TxAction::Added if in_original => {
                return Err(ValidationError::IllegalAdd {
                    index,
                    tx_hash: tx_hash(tx),
                })
            }
            TxAction::Unmodified | TxAction::Removed if !in_original => {
                return Err(ValidationError::UnknownTransaction {
                    index,
                    action: record.action,
                    tx_hash: tx_hash(tx),
                })
            }
            TxAction::Added | TxAction::Unmodified | TxAction::Removed => {}
        }

        if !record.action.is_retained() {
            continue;
        }
        if !retained.insert(tx) {
            return Err(ValidationError::DuplicateTransaction {
                index,
                tx_hash: tx_hash(tx),
            });
        }
        // Overflow can only mean the budget is blown.
        total = total
            .checked_add(tx.len() as u64)
            .ok_or(ValidationError::ExceedsMaxSize {
                total: u64::MAX,
                max: max_total_bytes,
            })?;
    }

    if total > max_total_bytes {
        return Err(ValidationError::ExceedsMaxSize {
            total,
            max: max_total_bytes,
        });
    }
    Ok(())
}

/// Total bytes of the transactions an edit set keeps in the proposal.
pub fn retained_bytes(edits: &ProposalEditSet) -> u64 {
    edits
        .tx_records
        .iter()
        .filter(|r| r.action.is_retained())
        .map(|r| r.tx.len() as u64)
        .fold(0u64, u64::saturating_add)
}
