//! # Result Commitment Subsystem (qc-01)
//!
//! After the application executes a block, every validator must commit to
//! the same ordered list of execution outcomes. This subsystem turns each
//! `ExecTxResult` into a canonical byte string that carries only its
//! deterministic fields, and commits to those byte strings with a binary
//! Merkle tree, issuing one inclusion proof per result.
//!
//! ## Commitment Flow
//!
//! ```text
//! [ExecTxResult; N] ──project──→ [DeterministicExecTxResult; N]
//!                                          │
//!                                     bincode (fixint, LE, size-limited)
//!                                          │
//!                                          ↓
//!                               [canonical bytes; N] ──→ shared-merkle
//!                                                            │
//!                                                            ↓
//!                                              ResultsCommitment { root, proofs }
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement | Location |
//! |-----------|-------------|----------|
//! | Diagnostic fields never committed | `log`, `info`, `codespace` absent from the view | canonical.rs |
//! | Absent data == empty data | `data` projected through `data_bytes()` | canonical.rs |
//! | Proof validity | Proofs issued for the exact bytes committed | commitment.rs |
//! | Bounded encoding | bincode size limit from `CommitmentConfig` | canonical.rs |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): Canonical view, committer, errors
//! - **Ports Layer** (`ports/`): Inbound API trait
//! - **Service** (`service.rs`): Config-driven implementation of the API

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::CommitmentConfig;
pub use domain::{
    canonicalize, commit, verify, CommitmentError, DeterministicEvent, DeterministicEventAttribute,
    DeterministicExecTxResult, ResultCommitter, ResultsCommitment,
};
pub use ports::ResultCommitmentApi;
pub use service::ResultCommitmentService;
