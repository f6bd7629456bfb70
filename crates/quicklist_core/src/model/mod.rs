//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical item record shared by store, sync and hosts.
//! - Generate stable, unique item identifiers.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId` that is never reused.
//! - Identifier generation is monotonic within one process.

pub mod todo;
