//! # Ports Layer
//!
//! Hexagonal architecture ports for the Result Commitment subsystem.
//!
//! Only a driving port exists: the subsystem is a pure function of its
//! inputs and drives nothing outward.

pub mod inbound;

pub use inbound::*;
