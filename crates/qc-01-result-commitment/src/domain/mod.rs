//! # Domain Layer
//!
//! Pure commitment logic for the Result Commitment subsystem.
//!
//! - `canonical`: the deterministic view of an execution result and its
//!   byte encoding
//! - `commitment`: Merkle commitment and proof verification over those bytes
//! - `errors`: `CommitmentError`
//!
//! This module contains NO I/O and NO logging.

pub mod canonical;
pub mod commitment;
pub mod errors;

pub use canonical::*;
pub use commitment::*;
pub use errors::*;
