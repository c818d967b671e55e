// src/supervise/mod.rs

//! Bounded process supervision.
//!
//! The only part of the crate with real concurrency semantics: [`bounded`]
//! launches an external command, races it against a wall-clock lifetime
//! budget, and enforces graceful-then-forceful termination with optional
//! output capture. Everything else in the crate is I/O plumbing around it.

pub mod bounded;

pub use bounded::{JOIN_GRACE, TERM_GRACE, run_bounded};
