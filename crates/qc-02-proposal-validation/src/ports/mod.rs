//! # Ports Layer
//!
//! Hexagonal architecture ports for the Proposal Validation subsystem.

pub mod inbound;

pub use inbound::*;
