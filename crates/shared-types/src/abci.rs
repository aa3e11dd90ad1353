//! # ABCI Data Model
//!
//! Types the application returns to the consensus engine:
//!
//! - **Execution**: `ExecTxResult`, `Event`, `EventAttribute`
//! - **Proposal preparation**: `TxAction`, `TxRecord`, `ProposalEditSet`
//!
//! Every field of `ExecTxResult` is either deterministic (identical on all
//! honest validators) or diagnostic. Only the deterministic fields may feed
//! a commitment; the projection that enforces this lives in qc-01.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

use crate::entities::Tx;

// =============================================================================
// EXECUTION RESULTS
// =============================================================================

/// Outcome of executing one transaction.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecTxResult {
    /// Status code, 0 means success. Deterministic.
    pub code: u32,
    /// Opaque result payload. Deterministic.
    ///
    /// `None` is what a decoder yields for an absent field; it is equivalent
    /// to `Some(vec![])` for every purpose of this crate family.
    #[serde_as(as = "Option<Bytes>")]
    pub data: Option<Vec<u8>>,
    /// Free-text log output. Non-deterministic.
    pub log: String,
    /// Free-text additional info. Non-deterministic.
    pub info: String,
    /// Gas requested by the transaction. Deterministic.
    pub gas_wanted: i64,
    /// Gas consumed by the transaction. Deterministic.
    pub gas_used: i64,
    /// Key/value annotations emitted during execution.
    pub events: Vec<Event>,
    /// Namespace for `code`. Non-deterministic.
    pub codespace: String,
}

impl ExecTxResult {
    /// Returns true if the transaction executed successfully.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Returns true if the transaction failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Result payload with `None` read as empty.
    pub fn data_bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }
}

/// A typed group of attributes emitted during execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type, e.g. `"transfer"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    /// Create an event of the given type with no attributes.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        index: bool,
    ) -> Self {
        self.attributes.push(EventAttribute {
            key: key.into(),
            value: value.into(),
            index,
        });
        self
    }
}

/// A single key/value pair of an `Event`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
    /// Node-local hint telling the indexer to index this attribute.
    #[serde(default)]
    pub index: bool,
}

// =============================================================================
// PROPOSAL PREPARATION
// =============================================================================

/// What the application did with one transaction while preparing a proposal.
///
/// Closed enumeration over the wire values 0..=3. Any other wire value
/// decodes as `Unknown`, which validation then rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TxAction {
    Unknown,
    /// Transaction from the original list, kept as is.
    Unmodified,
    /// Transaction the application introduced.
    Added,
    /// Transaction from the original list, dropped from the proposal.
    Removed,
}

impl TxAction {
    /// Returns true if the record's transaction ends up in the proposal.
    pub fn is_retained(self) -> bool {
        matches!(self, Self::Unmodified | Self::Added)
    }
}

impl From<i32> for TxAction {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Unmodified,
            2 => Self::Added,
            3 => Self::Removed,
            _ => Self::Unknown,
        }
    }
}

impl From<TxAction> for i32 {
    fn from(action: TxAction) -> Self {
        match action {
            TxAction::Unknown => 0,
            TxAction::Unmodified => 1,
            TxAction::Added => 2,
            TxAction::Removed => 3,
        }
    }
}

impl fmt::Display for TxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "UNKNOWN",
            Self::Unmodified => "UNMODIFIED",
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

/// A single edit entry of a proposal.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub action: TxAction,
    #[serde_as(as = "Bytes")]
    pub tx: Tx,
}

impl TxRecord {
    pub fn new(action: TxAction, tx: impl Into<Tx>) -> Self {
        Self {
            action,
            tx: tx.into(),
        }
    }
}

/// The application's answer to a proposal-preparation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalEditSet {
    /// Whether the application changed anything relative to its input.
    pub modified_tx: bool,
    /// Ordered edit records.
    pub tx_records: Vec<TxRecord>,
}

impl ProposalEditSet {
    pub fn new(modified_tx: bool, tx_records: Vec<TxRecord>) -> Self {
        Self {
            modified_tx,
            tx_records,
        }
    }

    /// The "no change" answer: every original transaction marked UNMODIFIED.
    pub fn unmodified<T: AsRef<[u8]>>(txs: &[T]) -> Self {
        Self {
            modified_tx: false,
            tx_records: txs
                .iter()
                .map(|tx| TxRecord::new(TxAction::Unmodified, tx.as_ref().to_vec()))
                .collect(),
        }
    }

    /// Transactions that make up the resulting proposal, in record order.
    pub fn included_txs(&self) -> Vec<&[u8]> {
        self.tx_records
            .iter()
            .filter(|r| r.action.is_retained())
            .map(|r| r.tx.as_slice())
            .collect()
    }

    pub fn added_txs(&self) -> Vec<&[u8]> {
        self.txs_with_action(TxAction::Added)
    }

    pub fn removed_txs(&self) -> Vec<&[u8]> {
        self.txs_with_action(TxAction::Removed)
    }

    pub fn unmodified_txs(&self) -> Vec<&[u8]> {
        self.txs_with_action(TxAction::Unmodified)
    }

    fn txs_with_action(&self, action: TxAction) -> Vec<&[u8]> {
        self.tx_records
            .iter()
            .filter(|r| r.action == action)
            .map(|r| r.tx.as_slice())
            .collect()
    }
}
