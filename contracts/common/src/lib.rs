#![no_std]

//! Shared governance types and helpers.
//!
//! Everything the lifecycle orchestrator and the governor-facing tooling
//! must agree on byte-for-byte lives here: the action/ballot data model,
//! the call payload encoding, and the description-hash / proposal-id
//! derivation rules.

pub mod encode;
pub mod governance;
pub mod hash;
