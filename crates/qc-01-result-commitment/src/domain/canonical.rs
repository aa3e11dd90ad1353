//! # Canonical View
//!
//! `DeterministicExecTxResult` is the single projection of an
//! `ExecTxResult` onto the fields every honest validator agrees on. Anything
//! that feeds a commitment goes through it, so the set of excluded fields
//! cannot drift between callers.
//!
//! ## Included
//!
//! `code`, `data` (absent read as empty), `gas_wanted`, `gas_used`, and for
//! each event its type and the key/value of each attribute.
//!
//! ## Excluded
//!
//! `log`, `info`, `codespace`, and the per-attribute `index` flag.
//!
//! ## Byte Layout
//!
//! bincode with fixed-width little-endian integers; every string, byte
//! string and list carries a `u64` length prefix:
//!
//! ```text
//! code: u32 | len: u64, data | gas_wanted: i64 | gas_used: i64 |
//! n_events: u64, { len, type | n_attrs: u64, { len, key | len, value }* }*
//! ```

use bincode::Options;
use serde::Serialize;
use shared_types::{Event, EventAttribute, ExecTxResult, MAX_BLOCK_SIZE_BYTES};

use super::errors::{CommitmentError, Result};

/// Deterministic projection of an `ExecTxResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterministicExecTxResult<'a> {
    pub code: u32,
    #[serde(with = "serde_bytes")]
    pub data: &'a [u8],
    pub gas_wanted: i64,
    pub gas_used: i64,
    pub events: Vec<DeterministicEvent<'a>>,
}

/// Deterministic projection of an `Event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterministicEvent<'a> {
    pub kind: &'a str,
    pub attributes: Vec<DeterministicEventAttribute<'a>>,
}

/// Deterministic projection of an `EventAttribute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterministicEventAttribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> From<&'a ExecTxResult> for DeterministicExecTxResult<'a> {
    fn from(result: &'a ExecTxResult) -> Self {
        Self {
            code: result.code,
            data: result.data_bytes(),
            gas_wanted: result.gas_wanted,
            gas_used: result.gas_used,
            events: result.events.iter().map(DeterministicEvent::from).collect(),
        }
    }
}

impl<'a> From<&'a Event> for DeterministicEvent<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            kind: &event.kind,
            attributes: event
                .attributes
                .iter()
                .map(DeterministicEventAttribute::from)
                .collect(),
        }
    }
}

impl<'a> From<&'a EventAttribute> for DeterministicEventAttribute<'a> {
    fn from(attribute: &'a EventAttribute) -> Self {
        Self {
            key: &attribute.key,
            value: &attribute.value,
        }
    }
}

impl DeterministicExecTxResult<'_> {
    /// Encode the view, failing if the output would exceed `max_bytes`.
    pub fn encode(&self, max_bytes: u64) -> std::result::Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian()
            .with_limit(max_bytes)
            .serialize(self)
    }
}

/// Canonical bytes of one result under the protocol-wide size bound.
pub fn canonicalize(result: &ExecTxResult) -> Result<Vec<u8>> {
    canonicalize_at(result, 0, MAX_BLOCK_SIZE_BYTES)
}

/// Canonical bytes of the result at position `index` of a batch.
pub(crate) fn canonicalize_at(
    result: &ExecTxResult,
    index: usize,
    max_bytes: u64,
) -> Result<Vec<u8>> {
    DeterministicExecTxResult::from(result)
        .encode(max_bytes)
        .map_err(|e| CommitmentError::Encoding {
            index,
            reason: e.to_string(),
        })
}
