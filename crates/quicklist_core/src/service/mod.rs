//! Use-case services composing store, persistence and confirmation.
//!
//! # Responsibility
//! - Provide the entry points hosts (FFI, CLI) call.
//! - Route every list mutation through persistence exactly once.

pub mod todo_service;
