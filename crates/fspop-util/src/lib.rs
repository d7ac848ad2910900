//! Shared utilities for fspopulate.
//!
//! This crate provides cross-cutting concerns used by the other fspopulate
//! crates: the error type, filesystem helpers, and terminal status and
//! progress output.

pub mod errors;
pub mod fs;
pub mod progress;
