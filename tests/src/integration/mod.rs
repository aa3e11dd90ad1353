//! # Integration Tests
//!
//! Cross-subsystem flows driven the way the consensus engine drives them.

pub mod round_flow;
