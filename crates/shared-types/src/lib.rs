//! # Shared Types Crate
//!
//! This crate contains the data model exchanged between the consensus engine
//! and the external application at the ABCI boundary.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Both the result commitment (qc-01) and the
//!   proposal validation (qc-02) subsystems consume these types.
//! - **Closed Enumerations**: Wire integers that name a finite set of states
//!   decode into enums, with out-of-range values mapped to an explicit
//!   `Unknown` variant instead of a decode failure.
//! - **Owned by the Engine**: Values are created per height/round by the
//!   application, consumed once and discarded. Nothing here persists.

pub mod abci;
pub mod entities;

pub use abci::*;
pub use entities::*;
