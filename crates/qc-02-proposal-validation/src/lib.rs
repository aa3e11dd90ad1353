//! # Proposal Validation Subsystem (qc-02)
//!
//! Before the engine proposes a block it lets the application rewrite the
//! candidate transaction list. The application answers with a
//! `ProposalEditSet`: one `TxRecord` per transaction saying whether it was
//! kept (UNMODIFIED), introduced (ADDED) or dropped (REMOVED). The
//! application is untrusted, so this subsystem checks that answer before
//! the engine builds a proposal from it.
//!
//! ## Validation Flow
//!
//! ```text
//! Engine ──original txs──→ Application
//!    ↑                          │
//!    │                    ProposalEditSet
//!    │                          ↓
//!    └──accept / reject── [ProposalValidationService]
//! ```
//!
//! On rejection the engine falls back to the unmodified list; that policy
//! lives outside this crate.
//!
//! ## Domain Invariants
//!
//! | Invariant | Error |
//! |-----------|-------|
//! | No UNKNOWN actions | `InvalidAction` |
//! | Original txs are never ADDED | `IllegalAdd` |
//! | Only original txs are UNMODIFIED or REMOVED | `UnknownTransaction` |
//! | Retained txs are unique | `DuplicateTransaction` |
//! | Retained bytes fit the budget | `ExceedsMaxSize` |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): Pure single-pass validator
//! - **Ports Layer** (`ports/`): Inbound API trait
//! - **Service** (`service.rs`): Config-driven implementation with tracing

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::ValidationConfig;
pub use domain::{retained_bytes, validate, Result, ValidationError, ValidationErrorKind};
pub use ports::ProposalValidationApi;
pub use service::ProposalValidationService;
