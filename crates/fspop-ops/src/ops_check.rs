//! Operation: compare an existing tree against its plan, read-only.

use std::io::ErrorKind;
use std::path::PathBuf;

use fspop_core::config::PopulationConfig;
use fspop_core::plan::Plan;
use fspop_util::errors::{FspopError, FspopResult};

/// How far a tree is from its plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files exactly at their planned size.
    pub complete: u64,
    /// Files that exist but are shorter than planned.
    pub short: u64,
    /// Planned files that do not exist yet.
    pub missing: u64,
    /// Files larger than planned. A populate run leaves these alone.
    pub oversized: u64,
    /// Planned paths occupied by something other than a regular file.
    pub blocked: u64,
    /// Bytes a populate run would append.
    pub missing_bytes: u64,
    /// First planned path that is not complete, in plan order.
    pub first_incomplete: Option<PathBuf>,
}

impl CheckReport {
    /// True when a populate run would write nothing and would not fail on
    /// a blocked path.
    pub fn is_complete(&self) -> bool {
        self.short == 0 && self.missing == 0 && self.blocked == 0
    }
}

/// Stat every planned file of `config` and classify it.
///
/// Nothing is created or modified.
pub fn check(config: &PopulationConfig) -> FspopResult<CheckReport> {
    let mut report = CheckReport::default();
    let root = config.root();

    for task in Plan::new(config) {
        let path = task.file_path(root);
        let expected = task.expected_size;

        let complete = match std::fs::metadata(&path) {
            Ok(meta) if !meta.is_file() => {
                report.blocked += 1;
                false
            }
            Ok(meta) if meta.len() < expected => {
                report.short += 1;
                report.missing_bytes += expected - meta.len();
                false
            }
            Ok(meta) if meta.len() > expected => {
                report.oversized += 1;
                true
            }
            Ok(_) => {
                report.complete += 1;
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                report.missing += 1;
                report.missing_bytes += expected;
                false
            }
            Err(source) => return Err(FspopError::Stat { path, source }.into()),
        };

        if !complete && report.first_incomplete.is_none() {
            tracing::debug!("First incomplete file: {}", path.display());
            report.first_incomplete = Some(path);
        }
    }

    Ok(report)
}
