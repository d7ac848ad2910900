//! Operation: summarize a plan without touching the filesystem.

use fspop_core::config::PopulationConfig;
use fspop_core::plan::{FileKind, FileTask, Plan};

/// Totals of a plan, as a dry run reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub files: u64,
    pub bulk_files: u64,
    pub standard_files: u64,
    /// Subdirectories the plan asks to create.
    pub directories: u64,
    pub total_bytes: u64,
    /// The final planned file, which may be shorter than its nominal size.
    pub last: Option<FileTask>,
}

/// Walk the whole plan of `config` and total it up.
pub fn plan_summary(config: &PopulationConfig) -> PlanSummary {
    let mut summary = PlanSummary::default();
    for task in Plan::new(config) {
        summary.files += 1;
        match task.kind {
            FileKind::Bulk => summary.bulk_files += 1,
            FileKind::Standard => summary.standard_files += 1,
        }
        if task.create_dir {
            summary.directories += 1;
        }
        summary.total_bytes += task.expected_size;
        summary.last = Some(task);
    }
    summary
}
