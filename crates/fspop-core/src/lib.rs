//! Core data types for fspopulate.
//!
//! This crate defines what a population run is made of: the default policy,
//! human-entered size parsing, the validated run configuration, the
//! deterministic fill buffer, and the lazily generated file plan.
//!
//! This crate performs no writes; the only filesystem access is reading an
//! optional policy file.

pub mod config;
pub mod fill;
pub mod plan;
pub mod size;

/// Number of leading "bulk" files under the default policy.
pub const DEFAULT_BULK_FILES: u64 = 768;

/// Number of subdirectories files are spread across under the default policy.
pub const DEFAULT_SUBDIRS: u64 = 256;

/// Bulk files are `total / DEFAULT_BULK_DIVISOR` bytes under the default policy.
pub const DEFAULT_BULK_DIVISOR: u64 = 1024;

/// Size of every file after the bulk files (10 MiB).
pub const DEFAULT_STANDARD_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Length of the fill buffer (10 MiB).
pub const FILL_BUFFER_LEN: usize = 10 * 1024 * 1024;

/// Seed of the fill buffer generator. Changing it changes every byte written.
pub const FILL_SEED: u64 = 1;

/// Progress is reported after every this many files.
pub const PROGRESS_INTERVAL: u64 = 100;
