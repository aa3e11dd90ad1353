//! # Domain Layer
//!
//! Pure validation logic for the Proposal Validation subsystem.
//!
//! - `validator`: single-pass check of an edit set against the original list
//! - `errors`: `ValidationError` and its fieldless `ValidationErrorKind`
//!
//! This module contains NO I/O and NO logging.

pub mod errors;
pub mod validator;

pub use errors::*;
pub use validator::*;
